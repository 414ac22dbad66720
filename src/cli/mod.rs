//! Command-line entry point.
//!
//! There is exactly one operation: consolidate the current working directory.
//! The manifest, output path, and traversal root are fixed names; the only
//! flag tunes logging.

use crate::consolidate::consolidate;
use crate::domain::{MANIFEST_FILENAME, OUTPUT_FILENAME};
use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Consolidate a codebase into a single reviewable snapshot
#[derive(Parser)]
#[command(name = "codebase-consolidator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let report = consolidate(
        Path::new("."),
        Path::new(MANIFEST_FILENAME),
        Path::new(OUTPUT_FILENAME),
    )?;

    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }

    println!("Successfully consolidated codebase into {}", OUTPUT_FILENAME);
    Ok(())
}
