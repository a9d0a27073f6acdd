//! Host-side utilities for the F14 rule code dictionary.
//!
//! Firmware headers carrying the rule codes are hand-maintained and have
//! been found with repeated blocks. This crate reads such a header, collapses
//! the repeats and audits what is left against the frozen symbol table in
//! `f14-codes`, so frontends (CLI, CI checks) can be layered on top.

mod audit;
mod formatter;
mod header;

pub use audit::{audit, AuditError, AuditReport, Mismatch, MissingSymbol, MAX_DEFINITIONS};
pub use formatter::{DictFormatter, SymbolRow};
pub use header::{parse, parse_value, HeaderDefinition, ParseError};
