//! Name/value definitions and duplicate collapsing
//!
//! Headers carrying these codes have been found with whole blocks repeated.
//! [`collapse`] reduces such a list to one definition per name and refuses
//! to choose between two different values for the same name.

use core::fmt;
use heapless::Vec;

/// A named code value as written in a header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Definition<'a> {
    pub name: &'a str,
    pub value: u8,
}

impl<'a> Definition<'a> {
    /// Create a new definition
    pub const fn new(name: &'a str, value: u8) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for Definition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Errors produced while collapsing definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseError<'a> {
    /// The same name was defined twice with different values
    Conflict { name: &'a str, first: u8, second: u8 },
    /// More distinct names than the output can hold
    Capacity(usize),
}

impl fmt::Display for CollapseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollapseError::Conflict { name, first, second } => {
                write!(f, "{} defined as both {} and {}", name, first, second)
            }
            CollapseError::Capacity(n) => write!(f, "More than {} distinct definitions", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollapseError<'_> {}

#[cfg(feature = "defmt")]
impl defmt::Format for CollapseError<'_> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CollapseError::Conflict { name, first, second } => {
                defmt::write!(fmt, "Conflict({=str}, {=u8}, {=u8})", *name, *first, *second)
            }
            CollapseError::Capacity(n) => defmt::write!(fmt, "Capacity({=usize})", *n),
        }
    }
}

/// Collapse repeated definitions to one per name.
///
/// The first occurrence of each name is kept, in input order. Repeats with
/// the same value are dropped; a repeat with a different value is an error.
pub fn collapse<'a, const N: usize>(
    definitions: impl IntoIterator<Item = Definition<'a>>,
) -> Result<Vec<Definition<'a>, N>, CollapseError<'a>> {
    let mut out: Vec<Definition<'a>, N> = Vec::new();

    for definition in definitions {
        match out.iter().find(|kept| kept.name == definition.name) {
            Some(kept) if kept.value == definition.value => continue,
            Some(kept) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "conflicting definition of {=str}: {=u8} vs {=u8}",
                    definition.name,
                    kept.value,
                    definition.value
                );
                return Err(CollapseError::Conflict {
                    name: definition.name,
                    first: kept.value,
                    second: definition.value,
                });
            }
            None => out.push(definition).map_err(|_| CollapseError::Capacity(N))?,
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_identical_repeats() {
        let defs = [
            Definition::new("START_HANDLER", 0),
            Definition::new("QUIT_HANDLER", 255),
            Definition::new("START_HANDLER", 0),
            Definition::new("QUIT_HANDLER", 255),
        ];
        let out = collapse::<8>(defs).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], Definition::new("START_HANDLER", 0));
        assert_eq!(out[1], Definition::new("QUIT_HANDLER", 255));
    }

    #[test]
    fn test_collapse_flags_conflict() {
        let defs = [
            Definition::new("ORBIT_MADE", 6),
            Definition::new("ORBIT_RESET", 7),
            Definition::new("ORBIT_MADE", 8),
        ];
        assert_eq!(
            collapse::<8>(defs),
            Err(CollapseError::Conflict { name: "ORBIT_MADE", first: 6, second: 8 })
        );
    }

    #[test]
    fn test_collapse_capacity() {
        let defs = [
            Definition::new("SPINNER_HIT", 0),
            Definition::new("SPINNER_LIGHT", 1),
            Definition::new("SPINNER_RESET", 2),
        ];
        assert_eq!(collapse::<2>(defs), Err(CollapseError::Capacity(2)));
        // Repeats do not count against capacity
        let repeated = [defs[0], defs[1], defs[0], defs[1]];
        assert_eq!(collapse::<2>(repeated).unwrap().len(), 2);
    }

    #[test]
    fn test_shared_values_across_names() {
        let defs = [
            Definition::new("START_HANDLER", 0),
            Definition::new("LAMP_SHOW_ROTATE", 0),
            Definition::new("ANIMATION_START", 0),
        ];
        assert_eq!(collapse::<4>(defs).unwrap().len(), 3);
    }
}
