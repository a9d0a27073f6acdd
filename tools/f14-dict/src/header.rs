//! C header reader
//!
//! Extracts byte-sized constant declarations from a firmware header:
//! `const byte NAME = VALUE;`, `const uint8_t NAME = VALUE;` and
//! `#define NAME VALUE`. Comments, include guards and other preprocessor
//! lines are skipped.

use serde::Serialize;
use thiserror::Error;

use f14_codes::Definition;

const BYTE_TYPES: &[&str] = &["byte", "uint8_t", "unsigned char"];

/// One constant declaration read from a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderDefinition {
    pub name: String,
    pub value: u8,
    /// 1-based source line.
    pub line: usize,
}

impl HeaderDefinition {
    pub fn definition(&self) -> Definition<'_> {
        Definition::new(&self.name, self.value)
    }
}

/// Errors produced while reading a header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: malformed declaration `{text}`")]
    Malformed { line: usize, text: String },
    #[error("line {line}: {name} = {value} does not fit in a byte")]
    OutOfRange { line: usize, name: String, value: u64 },
}

/// Parses a decimal or `0x` hexadecimal byte value. C integer suffixes
/// (`u`, `l` and their combinations) are accepted and ignored.
pub fn parse_value(text: &str) -> Option<u64> {
    let text = text.trim().trim_end_matches(['u', 'U', 'l', 'L']);
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

/// Reads every byte constant declared in `text`, in source order.
pub fn parse(text: &str) -> Result<Vec<HeaderDefinition>, ParseError> {
    let mut definitions = Vec::new();
    let mut in_block = false;

    // Statement text carried over from earlier lines, with its first line
    let mut pending = String::new();
    let mut start = 0;

    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let code = strip_comments(raw_line, &mut in_block);
        let code = code.trim();

        if code.is_empty() {
            continue;
        }

        if pending.is_empty() {
            if let Some(directive) = code.strip_prefix('#') {
                if let Some(definition) = parse_define(directive, line)? {
                    definitions.push(definition);
                }
                continue;
            }
        }

        let mut rest = code;
        while let Some((head, tail)) = rest.split_once(';') {
            if pending.is_empty() {
                start = line;
            } else {
                pending.push(' ');
            }
            pending.push_str(head);

            let statement = pending.trim();
            if !statement.is_empty() {
                definitions.push(parse_const(statement, start)?);
            }
            pending.clear();
            rest = tail.trim();
        }

        if !rest.is_empty() {
            if pending.is_empty() {
                start = line;
            } else {
                pending.push(' ');
            }
            pending.push_str(rest);
        }
    }

    if !pending.trim().is_empty() {
        return Err(ParseError::Malformed {
            line: start,
            text: pending.trim().to_string(),
        });
    }

    Ok(definitions)
}

/// Removes `//` and `/* */` comments, tracking block comments across lines.
fn strip_comments(line: &str, in_block: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    loop {
        if *in_block {
            match rest.find("*/") {
                Some(end) => {
                    rest = &rest[end + 2..];
                    *in_block = false;
                }
                None => return out,
            }
        }

        let line_comment = rest.find("//");
        let block_comment = rest.find("/*");
        match (line_comment, block_comment) {
            (Some(l), Some(b)) if l < b => {
                out.push_str(&rest[..l]);
                return out;
            }
            (_, Some(b)) => {
                out.push_str(&rest[..b]);
                out.push(' ');
                rest = &rest[b + 2..];
                *in_block = true;
            }
            (Some(l), None) => {
                out.push_str(&rest[..l]);
                return out;
            }
            (None, None) => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

fn parse_define(directive: &str, line: usize) -> Result<Option<HeaderDefinition>, ParseError> {
    let mut tokens = directive.split_whitespace();
    if tokens.next() != Some("define") {
        return Ok(None);
    }

    let (name, value) = match (tokens.next(), tokens.next()) {
        (Some(name), Some(value)) => (name, value),
        // Include guards and flag macros carry no value
        _ => return Ok(None),
    };

    // Function-like or expression macros are not byte constants
    if !is_identifier(name) || tokens.next().is_some() {
        return Ok(None);
    }

    let value = value.trim_start_matches('(').trim_end_matches(')');
    match parse_value(value) {
        Some(value) => checked(name, value, line).map(Some),
        None => Ok(None),
    }
}

fn parse_const(statement: &str, line: usize) -> Result<HeaderDefinition, ParseError> {
    let malformed = || ParseError::Malformed {
        line,
        text: statement.to_string(),
    };

    let (lhs, rhs) = statement.split_once('=').ok_or_else(malformed)?;
    let mut words: Vec<&str> = lhs.split_whitespace().collect();

    let name = words.pop().filter(|name| is_identifier(name)).ok_or_else(malformed)?;

    if words.first() == Some(&"static") {
        words.remove(0);
    }
    if words.first() != Some(&"const") {
        return Err(malformed());
    }
    let ty = words[1..].join(" ");
    if !BYTE_TYPES.contains(&ty.as_str()) {
        return Err(malformed());
    }

    let value = parse_value(rhs).ok_or_else(malformed)?;
    checked(name, value, line)
}

fn checked(name: &str, value: u64, line: usize) -> Result<HeaderDefinition, ParseError> {
    let value = u8::try_from(value).map_err(|_| ParseError::OutOfRange {
        line,
        name: name.to_string(),
        value,
    })?;

    Ok(HeaderDefinition {
        name: name.to_string(),
        value,
        line,
    })
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
