//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("anatomy").expect("Failed to find anatomy binary")
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

// ============================================================================
// Systems Command Tests
// ============================================================================

#[test]
fn test_systems_lists_catalog_in_order() {
    cli_cmd()
        .arg("systems")
        .assert()
        .success()
        .stdout(predicate::str::contains("Systems (6):"))
        .stdout(predicate::str::contains("skeleton"))
        .stdout(predicate::str::contains("Cardiovascular System"))
        .stdout(predicate::str::is_match("(?s)skeleton.*nervous.*heart.*digestive.*respiratory.*cell").unwrap());
}

#[test]
fn test_systems_in_arabic() {
    cli_cmd()
        .args(["--lang", "ar", "systems"])
        .assert()
        .success()
        .stdout(predicate::str::contains("الجهاز الهيكلي"));
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_heart() {
    cli_cmd()
        .args(["show", "heart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cardiovascular System"))
        .stdout(predicate::str::contains("  ID: heart"))
        .stdout(predicate::str::contains("Direction: ltr"))
        .stdout(predicate::str::contains("Cell Types:"))
        .stdout(predicate::str::contains("Pacemaker Cells"))
        .stdout(predicate::str::contains("Animation: Heartbeat (4 phases)"));
}

#[test]
fn test_show_in_arabic_is_rtl() {
    cli_cmd()
        .args(["show", "skeleton", "--lang", "ar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("الجهاز الهيكلي"))
        .stdout(predicate::str::contains("Direction: rtl"));
}

#[test]
fn test_show_unknown_system_fails() {
    cli_cmd()
        .args(["show", "spleen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown system: spleen"));
}

// ============================================================================
// Translate / Keys Command Tests
// ============================================================================

#[test]
fn test_translate_known_key() {
    cli_cmd()
        .args(["translate", "close", "--lang", "ar"])
        .assert()
        .success()
        .stdout("إغلاق\n");
}

#[test]
fn test_translate_missing_key_prints_key() {
    cli_cmd()
        .args(["translate", "no_such_key"])
        .assert()
        .success()
        .stdout("no_such_key\n");
}

#[test]
fn test_keys_sorted() {
    cli_cmd()
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("action_potential\n"));
}

#[test]
fn test_unknown_language_rejected() {
    cli_cmd()
        .args(["--lang", "fr", "systems"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown language: fr"));
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_builtin_content() {
    cli_cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 6 systems, 123 keys per language"));
}

#[test]
fn test_check_reports_unpaired_keys() {
    let translations = write_temp(r#"{"en": {"close": "Close", "back": "Back"}, "ar": {"close": "إغلاق"}}"#);
    let catalog = write_temp(r#"{"systems": []}"#);

    cli_cmd()
        .arg("--translations")
        .arg(translations.path())
        .arg("--catalog")
        .arg(catalog.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("key 'back' exists in 'en' but not in 'ar'"))
        .stderr(predicate::str::contains("1 coverage issue(s) found"));
}

#[test]
fn test_missing_override_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    cli_cmd()
        .arg("--catalog")
        .arg(dir.path().join("absent.json"))
        .arg("systems")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}
