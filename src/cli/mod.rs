//! Command-line interface for header-paths
//!
//! The conversion takes zero configuration: the input and output file names
//! are fixed, so the parser only carries the standard help/version surface
//! and a verbosity switch.

use crate::convert;
use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Convert header-file path lists between Windows and POSIX separator conventions
#[derive(Parser)]
#[command(name = "header-paths")]
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

    convert::run_default()
}
