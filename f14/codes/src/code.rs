//! The `Code` trait and the macro that declares code groups

use core::fmt;
use crate::{CodeError, CodeResult, Group};

/// Base trait for every F14 code group
pub trait Code:
    Copy + Eq + fmt::Debug + fmt::Display + Into<u8> + TryFrom<u8, Error = CodeError> + 'static
{
    /// Group this code type belongs to
    const GROUP: Group;

    /// Get the raw 8-bit value
    fn raw(self) -> u8;

    /// Get the upper-case symbol name
    fn symbol(self) -> &'static str;

    /// Convert a raw value, if the group defines it
    fn from_raw(value: u8) -> Option<Self>;

    /// Every code of the group, in declaration order
    fn all() -> &'static [Self];

    /// Convert a raw value, reporting the group on failure
    fn decode(value: u8) -> CodeResult<Self> {
        Self::from_raw(value).ok_or(CodeError::UnknownCode {
            group: Self::GROUP,
            value,
        })
    }
}

/// Declares a `#[repr(u8)]` code group together with its symbol rows.
///
/// Each variant is written once as `Variant = value => "SYMBOL"`; the enum
/// discriminant, the symbol table row and the raw conversion are all derived
/// from that single line. Duplicate values inside a group are rejected by the
/// compiler as duplicate discriminants.
macro_rules! define_codes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $group:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $symbol:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )*
        }

        impl $name {
            /// Every code of this group, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Symbol table rows for this group
            pub const SYMBOLS: &'static [$crate::Symbol] = &[
                $($crate::Symbol::new($crate::Group::$group, $symbol, $value)),*
            ];

            /// Get the raw 8-bit value
            pub const fn raw(self) -> u8 {
                self as u8
            }

            /// Get the upper-case symbol name
            pub const fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)*
                }
            }

            /// Convert a raw value, if this group defines it
            pub const fn from_raw(value: u8) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::Code for $name {
            const GROUP: $crate::Group = $crate::Group::$group;

            fn raw(self) -> u8 {
                $name::raw(self)
            }

            fn symbol(self) -> &'static str {
                $name::symbol(self)
            }

            fn from_raw(value: u8) -> Option<Self> {
                $name::from_raw(value)
            }

            fn all() -> &'static [Self] {
                $name::ALL
            }
        }

        impl From<$name> for u8 {
            fn from(code: $name) -> u8 {
                code.raw()
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::CodeError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                <$name as $crate::Code>::decode(value)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.symbol())
            }
        }

        #[cfg(feature = "defmt")]
        impl defmt::Format for $name {
            fn format(&self, fmt: defmt::Formatter) {
                defmt::write!(fmt, "{=str}", self.symbol());
            }
        }
    };
}
