//! # xtask - workspace automation
//!
//! See [`HELP_TEXT`] for the list of commands.

use anyhow::{Result, bail};
use xshell::{Shell, cmd};

/// Help text shown by `cargo run -p xtask -- help`.
pub const HELP_TEXT: &str = r#"xtask

Usage:
  cargo run -p xtask -- <command>

Commands:
  help         Show this message
  fmt          Run rustfmt
  fmt-check    Check formatting (CI)
  clippy       Run clippy (workspace)
  test         Run tests through nextest, then doctests (workspace)
  ci           Run fmt-check + clippy + test (CI profile)

Note:
  cargo-nextest is installed automatically on the first test run
"#;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let sh = Shell::new()?;

    match cmd.as_str() {
        "help" | "-h" | "--help" => {
            println!("{HELP_TEXT}");
            Ok(())
        }
        "fmt" => Ok(cmd!(sh, "cargo fmt --all").run()?),
        "fmt-check" => Ok(cmd!(sh, "cargo fmt --all -- --check").run()?),
        "clippy" => Ok(cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?),
        "test" => {
            ensure_nextest(&sh)?;
            // e2e tests locate the nlsv2tsv binary in target/
            cmd!(sh, "cargo build --workspace").run()?;
            cmd!(sh, "cargo nextest run --workspace").run()?;
            // nextest does not run doctests
            cmd!(sh, "cargo test --workspace --doc").run()?;
            Ok(())
        }
        "ci" => {
            ensure_nextest(&sh)?;
            cmd!(sh, "cargo fmt --all -- --check").run()?;
            cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
            cmd!(sh, "cargo build --workspace").run()?;
            cmd!(sh, "cargo nextest run --workspace --profile ci").run()?;
            cmd!(sh, "cargo test --workspace --doc").run()?;
            Ok(())
        }
        other => bail!("Unknown command: {other}\n\nRun: cargo run -p xtask -- help"),
    }
}

/// Installs cargo-nextest if it is not already available.
fn ensure_nextest(sh: &Shell) -> Result<()> {
    // quiet: only the exit status matters here
    if cmd!(sh, "cargo nextest --version").quiet().run().is_ok() {
        return Ok(());
    }

    eprintln!("cargo-nextest not found, installing...");
    cmd!(sh, "cargo install cargo-nextest --locked").run()?;
    eprintln!("cargo-nextest installed");
    Ok(())
}
