#![no_std]
#![forbid(unsafe_code)]

//! # F14 Codes
//!
//! Rule vocabulary for the F14 pinball ruleset: the handler lifecycle
//! commands, lamp-show and animation identifiers, and the per-feature event
//! codes that the rule handlers switch on.
//!
//! Every naming family is its own `#[repr(u8)]` enum, so a code can only be
//! matched in the dispatch context it belongs to. Values are shared freely
//! *across* families (`START_HANDLER`, `LAMP_SHOW_ROTATE` and
//! `ANIMATION_START` are all 0) but never *within* one.

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

#[macro_use]
mod code;

pub mod definitions;
pub mod group;
pub mod lamps;
pub mod lifecycle;
pub mod lock;
pub mod playfield;
pub mod scoring;
pub mod symbols;

pub use code::Code;
pub use definitions::*;
pub use group::*;
pub use lamps::*;
pub use lifecycle::*;
pub use lock::*;
pub use playfield::*;
pub use scoring::*;
pub use symbols::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used for code conversions and lookups
pub type CodeResult<T> = Result<T, CodeError>;

/// Errors produced when converting raw values or names into codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// The group does not define this value
    UnknownCode { group: Group, value: u8 },
    /// No symbol carries this name
    UnknownName,
    /// No group carries this name
    UnknownGroup,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeError::UnknownCode { group, value } => {
                write!(f, "Group {} has no code {}", group, value)
            }
            CodeError::UnknownName => write!(f, "Unknown symbol name"),
            CodeError::UnknownGroup => write!(f, "Unknown group name"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodeError {}

#[cfg(feature = "defmt")]
impl defmt::Format for CodeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CodeError::UnknownCode { group, value } => {
                defmt::write!(fmt, "UnknownCode({}, {=u8})", group, *value)
            }
            CodeError::UnknownName => defmt::write!(fmt, "UnknownName"),
            CodeError::UnknownGroup => defmt::write!(fmt, "UnknownGroup"),
        }
    }
}
