//! E2E tests for the `nlsv2tsv` CLI.

use std::fs;

use assert_cmd::Command;
use e2e_tests::{fixture, read_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

/// Builds a command running `nlsv2tsv`.
///
/// `cargo_bin` is deprecated because of an edge case with custom build
/// directories, but it is the only option for a binary from another crate.
#[expect(deprecated)]
fn nlsv2tsv() -> Command {
    Command::cargo_bin("nlsv2tsv").unwrap()
}

// ============================================================================
// Usage
// ============================================================================

#[test]
fn test_no_arguments_prints_usage() {
    nlsv2tsv()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: nlsv2tsv <input.nlsv> <output.tsv>"));
}

#[test]
fn test_help_prints_usage() {
    nlsv2tsv().arg("--help").assert().success().stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_does_not_touch_files() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.tsv");

    nlsv2tsv()
        .args(["--help", fixture("records_example.nlsv").to_str().unwrap()])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));

    assert!(!output.exists());
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_convert_example() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.tsv");

    nlsv2tsv()
        .arg(fixture("records_example.nlsv"))
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done, written 3 records."));

    assert_eq!(fs::read_to_string(&output).unwrap(), read_fixture("records_example.tsv").unwrap());
}

#[test]
fn test_convert_empty_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.tsv");

    nlsv2tsv()
        .arg(fixture("empty.nlsv"))
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done, written 0 records."));

    assert_eq!(fs::read(&output).unwrap(), b"");
}

#[test]
fn test_convert_blank_only_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.tsv");

    nlsv2tsv()
        .arg(fixture("blank_only.nlsv"))
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done, written 0 records."));

    assert_eq!(fs::read(&output).unwrap(), b"");
}

#[test]
fn test_inconsistent_lengths_warn_and_continue() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.tsv");

    nlsv2tsv()
        .arg(fixture("inconsistent.nlsv"))
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done, written 2 records."))
        .stderr(predicate::str::contains("Inconsistent record length"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "x\ny\tz\n");
}

#[test]
fn test_rust_log_can_silence_warnings() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.tsv");

    nlsv2tsv()
        .env("RUST_LOG", "off")
        .arg(fixture("inconsistent.nlsv"))
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_missing_input_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.tsv");

    nlsv2tsv()
        .arg(dir.path().join("nonexistent.nlsv"))
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("not found"));

    assert!(!output.exists());
}

#[test]
fn test_output_is_directory_fails() {
    let dir = tempdir().unwrap();

    nlsv2tsv()
        .arg(fixture("records_example.nlsv"))
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert"));
}

#[test]
fn test_too_many_arguments_fails() {
    nlsv2tsv().args(["a.nlsv", "b.tsv", "c"]).assert().failure();
}
