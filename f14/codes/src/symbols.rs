//! Symbol table: every F14 code name with its group and value

use core::fmt;
use crate::{CodeError, CodeResult, Definition, Group};

/// Total number of symbols across all groups
pub const SYMBOL_COUNT: usize = 67;

/// One row of the symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub group: Group,
    pub name: &'static str,
    pub value: u8,
}

impl Symbol {
    /// Create a new symbol row
    pub const fn new(group: Group, name: &'static str, value: u8) -> Self {
        Self { group, name, value }
    }

    /// Name/value pair of this row
    pub const fn definition(&self) -> Definition<'static> {
        Definition::new(self.name, self.value)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Symbol {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str} = {=u8}", self.name, self.value);
    }
}

/// Iterate over the whole table, group by group
pub fn symbols() -> impl Iterator<Item = &'static Symbol> {
    Group::ALL.iter().flat_map(|group| group.symbols().iter())
}

/// Look up a symbol by its exact upper-case name
pub fn lookup(name: &str) -> CodeResult<&'static Symbol> {
    symbols()
        .find(|symbol| symbol.name == name)
        .ok_or(CodeError::UnknownName)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_count() {
        assert_eq!(symbols().count(), SYMBOL_COUNT);
    }

    #[test]
    fn test_names_unique_across_table() {
        for (i, a) in symbols().enumerate() {
            for b in symbols().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_lookup() {
        let symbol = lookup("RESCUE_TARGET_RIGHT_LIGHT").unwrap();
        assert_eq!(symbol.group, Group::RescueTarget);
        assert_eq!(symbol.value, 5);

        assert_eq!(lookup("quit_handler"), Err(CodeError::UnknownName));
        assert_eq!(lookup("ORBIT_8"), Err(CodeError::UnknownName));
    }

    #[test]
    fn test_symbol_definition() {
        let definition = lookup("QUIT_SHOW").unwrap().definition();
        assert_eq!(definition, Definition::new("QUIT_SHOW", 255));
    }
}
