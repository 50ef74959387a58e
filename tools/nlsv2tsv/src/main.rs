//! CLI tool for converting NLSV files to TSV.
//!
//! # Usage
//!
//! ```bash
//! nlsv2tsv records.nlsv records.tsv
//!
//! # Show debug events as well as length warnings
//! RUST_LOG=debug nlsv2tsv records.nlsv records.tsv
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use nlsv::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// One-line usage, printed for `--help` or missing arguments.
const USAGE: &str = "Usage: nlsv2tsv <input.nlsv> <output.tsv>";

/// Convert an NLSV file (one value per line, blank line between records)
/// into a TSV file (one tab-joined line per record).
#[derive(Parser, Debug)]
#[command(name = "nlsv2tsv")]
#[command(version, about, disable_help_flag = true)]
struct Args {
    /// Input file in NLSV format.
    input: Option<PathBuf>,

    /// Output TSV file. Created, or truncated if it exists.
    output: Option<PathBuf>,

    /// Print usage and exit.
    #[arg(long)]
    help: bool,
}

/// What the command did.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Usage,
    Converted(Summary),
    /// Anticipated failure, already reported.
    Failed,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    execute(Args::parse()).map(|_| ())
}

fn execute(args: Args) -> Result<Outcome> {
    let (false, Some(input), Some(output)) = (args.help, &args.input, &args.output) else {
        println!("{USAGE}");
        return Ok(Outcome::Usage);
    };

    match convert_files(input, output) {
        Ok(summary) => {
            println!("Done, written {} records.", summary.records);
            Ok(Outcome::Converted(summary))
        }
        Err(e) if e.is_handled() => {
            debug!(error = ?e, "conversion aborted");
            eprintln!("Error: {e}");
            Ok(Outcome::Failed)
        }
        Err(e) => Err(e).with_context(|| describe(input, output)),
    }
}

fn describe(input: &Path, output: &Path) -> String {
    format!("Failed to convert {} to {}", input.display(), output.display())
}
