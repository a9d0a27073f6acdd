//! Dictionary Formatter
//!
//! Renders symbol rows and audit reports as colored text or JSON

use colored::{ColoredString, Colorize};
use serde::Serialize;

use f14_codes::{Group, Symbol};

use crate::AuditReport;

/// Serializable view of one symbol table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolRow {
    pub group: &'static str,
    pub name: &'static str,
    pub value: u8,
}

impl From<&Symbol> for SymbolRow {
    fn from(symbol: &Symbol) -> Self {
        Self {
            group: symbol.group.name(),
            name: symbol.name,
            value: symbol.value,
        }
    }
}

pub struct DictFormatter {
    json_format: bool,
}

impl DictFormatter {
    pub fn new(json_format: bool) -> Self {
        Self { json_format }
    }

    pub fn format_symbols<'a>(
        &self,
        symbols: impl IntoIterator<Item = &'a Symbol>,
    ) -> serde_json::Result<String> {
        let rows: Vec<SymbolRow> = symbols.into_iter().map(SymbolRow::from).collect();

        if self.json_format {
            return serde_json::to_string_pretty(&rows);
        }

        let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
        let mut out = String::new();
        let mut current: Option<&str> = None;
        for row in &rows {
            if current != Some(row.group) {
                out.push_str(&format!("[{}]\n", group_color(row.group)));
                current = Some(row.group);
            }
            out.push_str(&format!(
                "  {:<width$}  {:>3}  (0x{:02X})\n",
                row.name,
                row.value,
                row.value,
                width = width
            ));
        }
        Ok(out)
    }

    pub fn format_symbol(&self, symbol: &Symbol) -> serde_json::Result<String> {
        if self.json_format {
            return serde_json::to_string(&SymbolRow::from(symbol));
        }
        Ok(format!(
            "{:<16} {} = {}",
            group_color(symbol.group.name()),
            symbol.name.bold(),
            symbol.value
        ))
    }

    pub fn format_report(&self, report: &AuditReport) -> serde_json::Result<String> {
        if self.json_format {
            return serde_json::to_string_pretty(report);
        }

        let mut out = format!(
            "{} declarations, {} identical repeats collapsed\n",
            report.definitions, report.collapsed
        );

        for m in &report.mismatched {
            out.push_str(&format!(
                "{} line {}: {} = {} (expected {} in {})\n",
                "MISMATCH".bright_red(),
                m.line,
                m.name,
                m.found,
                m.expected,
                m.group
            ));
        }
        for u in &report.unknown {
            out.push_str(&format!(
                "{} line {}: {} = {}\n",
                "UNKNOWN ".yellow(),
                u.line,
                u.name,
                u.value
            ));
        }
        for m in &report.missing {
            out.push_str(&format!(
                "{} {} = {} ({})\n",
                "MISSING ".magenta(),
                m.name,
                m.value,
                m.group
            ));
        }

        if report.is_clean() {
            out.push_str(&format!("{}\n", "OK".bright_green()));
        }
        Ok(out)
    }
}

fn group_color(name: &str) -> ColoredString {
    match name.parse::<Group>() {
        Ok(Group::Handler | Group::Show | Group::AnimationPhase) => name.bright_white(),
        Ok(Group::LampShow | Group::Animation) => name.bright_yellow(),
        Ok(Group::Spinner | Group::Orbit | Group::Vuk) => name.bright_cyan(),
        Ok(Group::RescueTarget | Group::Rescue) => name.bright_green(),
        Ok(Group::Award | Group::Bonus | Group::LaunchBonus | Group::LineOfDeath) => {
            name.bright_magenta()
        }
        Ok(Group::Lock) => name.bright_blue(),
        Err(_) => name.normal(),
    }
}
