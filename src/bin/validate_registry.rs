//! Registry manifest validator.
//!
//! Checks every item in `registry.json` for required fields, a known type,
//! existing files, resolvable dependencies and a valid access tier, then
//! prints all issues at once.
//!
//! # Usage
//!
//! ```bash
//! # Validate ./registry.json against files under the current directory
//! validate-registry
//!
//! # Another project, machine-readable output
//! validate-registry --root ../acme-ui --output json
//! ```
//!
//! Exits 0 when the manifest is clean and 1 otherwise. Set `RUST_LOG=debug`
//! to trace each item as it is checked.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use kitbash::registry::{validate_path, DEFAULT_MANIFEST};
use kitbash::{render_report, AdaptiveTheme, OutputMode};

/// Validates a component registry manifest.
#[derive(Parser, Debug)]
#[command(name = "validate-registry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Manifest path, relative to --root unless absolute
    #[arg(long, short = 'm', default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Project root that manifest file paths are resolved against
    #[arg(long, short = 'r', default_value = ".")]
    root: PathBuf,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputMode::Auto)]
    output: OutputMode,
}

fn main() -> ExitCode {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the manifest passed.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let report = validate_path(&cli.manifest, &cli.root)?;

    // Only coloured output asks the OS for its light/dark appearance.
    let themes = AdaptiveTheme::report();
    let rendered = render_report(&report, themes.select(cli.output), cli.output)
        .context("failed to render validation report")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write report")?;
    stdout.flush()?;

    Ok(report.is_ok())
}
