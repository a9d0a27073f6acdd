//! End-to-end audit of the shipped header fixture

use std::path::Path;
use std::process::Command;

use f14_codes::SYMBOL_COUNT;
use f14_dict::{audit, parse};

const FIXTURE: &str = include_str!("fixtures/f14_constants.h");

fn fixture_path() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/f14_constants.h")
        .display()
        .to_string()
}

#[test]
fn fixture_repeats_collapse_to_clean_table() {
    let definitions = parse(FIXTURE).unwrap();
    assert_eq!(definitions.len(), SYMBOL_COUNT + 16);

    let report = audit(&definitions).unwrap();
    assert_eq!(report.collapsed, 16);
    assert!(report.mismatched.is_empty());
    assert!(report.unknown.is_empty());
    assert!(report.missing.is_empty());
    assert!(report.is_clean());
}

#[test]
fn fixture_conflicting_repeat_is_flagged() {
    let tampered = format!("{FIXTURE}\nconst byte ORBIT_CLOCK_TIMEOUT = 8;\n");
    let definitions = parse(&tampered).unwrap();
    let err = audit(&definitions).unwrap_err();
    assert!(err.to_string().contains("ORBIT_CLOCK_TIMEOUT"));
}

#[test]
fn cli_check_fixture_succeeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_f14-dict"))
        .args(["check", "--json", &fixture_path()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["collapsed"], 16);
    assert_eq!(report["missing"].as_array().unwrap().len(), 0);
}

#[test]
fn cli_decode_reports_unknown_values() {
    let output = Command::new(env!("CARGO_BIN_EXE_f14-dict"))
        .args(["decode", "orbit", "10", "8"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("ORBIT_CLOCK_TIMEOUT"));
    assert!(stderr.contains("Group orbit has no code 8"));
}

#[test]
fn cli_lookup_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_f14-dict"))
        .args(["lookup", "--json", "BALL_ARRIVED_LOCK_3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let row: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(row["group"], "lock");
    assert_eq!(row["value"], 21);
}
