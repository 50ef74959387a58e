//! # e2e-tests - end-to-end tests for the `nlsv2tsv` binary
//!
//! ## Fixtures
//!
//! Test files live in `fixtures/`:
//! - `records_example.nlsv` — three records, extra blank lines, no trailing blank line
//! - `records_example.tsv` — the expected conversion of `records_example.nlsv`
//! - `inconsistent.nlsv` — second record longer than the first
//! - `blank_only.nlsv` — blank and whitespace-only lines
//! - `empty.nlsv` — zero bytes

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

/// Path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Path to a fixture by file name.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Reads a fixture into a string.
pub fn read_fixture(name: &str) -> Result<String> {
    let path = fixture(name);
    fs::read_to_string(&path).with_context(|| format!("failed to read fixture {}", path.display()))
}
