use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use f14_codes::{collapse, lookup, symbols, CollapseError};

use crate::HeaderDefinition;

/// Most distinct names a header may declare.
pub const MAX_DEFINITIONS: usize = 256;

/// A known name declared with a different value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub name: String,
    pub group: &'static str,
    pub expected: u8,
    pub found: u8,
    pub line: usize,
}

/// A table row the header does not declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingSymbol {
    pub name: &'static str,
    pub group: &'static str,
    pub value: u8,
}

/// Result of comparing a header against the symbol table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Declarations read from the header, repeats included.
    pub definitions: usize,
    /// Identical repeats dropped while collapsing.
    pub collapsed: usize,
    pub mismatched: Vec<Mismatch>,
    pub unknown: Vec<HeaderDefinition>,
    pub missing: Vec<MissingSymbol>,
}

impl AuditReport {
    /// True when the header matches the table exactly.
    pub fn is_clean(&self) -> bool {
        self.is_clean_partial() && self.missing.is_empty()
    }

    /// True when every declared name matches the table; missing rows allowed.
    pub fn is_clean_partial(&self) -> bool {
        self.mismatched.is_empty() && self.unknown.is_empty()
    }
}

/// Errors that stop an audit before comparison.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuditError {
    #[error(
        "{name} is defined as {first} on line {first_line} and as {second} on line {second_line}"
    )]
    Conflict {
        name: String,
        first: u8,
        first_line: usize,
        second: u8,
        second_line: usize,
    },
    #[error("header declares more than {0} distinct names")]
    Capacity(usize),
}

/// Collapses repeated declarations and compares the result to the table.
pub fn audit(definitions: &[HeaderDefinition]) -> Result<AuditReport, AuditError> {
    let collapsed = collapse::<MAX_DEFINITIONS>(definitions.iter().map(|d| d.definition()))
        .map_err(|err| conflict_lines(definitions, err))?;

    let mut report = AuditReport {
        definitions: definitions.len(),
        collapsed: definitions.len() - collapsed.len(),
        ..AuditReport::default()
    };

    let mut seen = HashSet::new();
    for declared in definitions {
        if !seen.insert(declared.name.as_str()) {
            continue;
        }
        match lookup(&declared.name) {
            Ok(symbol) if symbol.value == declared.value => {}
            Ok(symbol) => report.mismatched.push(Mismatch {
                name: declared.name.clone(),
                group: symbol.group.name(),
                expected: symbol.value,
                found: declared.value,
                line: declared.line,
            }),
            Err(_) => report.unknown.push(declared.clone()),
        }
    }

    report.missing = symbols()
        .filter(|symbol| !collapsed.iter().any(|d| d.name == symbol.name))
        .map(|symbol| MissingSymbol {
            name: symbol.name,
            group: symbol.group.name(),
            value: symbol.value,
        })
        .collect();

    Ok(report)
}

fn line_of(definitions: &[HeaderDefinition], name: &str, value: u8) -> usize {
    definitions
        .iter()
        .find(|d| d.name == name && d.value == value)
        .map_or(0, |d| d.line)
}

fn conflict_lines(definitions: &[HeaderDefinition], err: CollapseError<'_>) -> AuditError {
    match err {
        CollapseError::Conflict { name, first, second } => AuditError::Conflict {
            name: name.to_string(),
            first,
            first_line: line_of(definitions, name, first),
            second,
            second_line: line_of(definitions, name, second),
        },
        CollapseError::Capacity(n) => AuditError::Capacity(n),
    }
}
