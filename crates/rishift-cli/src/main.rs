//! rishift CLI - PPI relative importance shift analyzer
//!
//! Usage:
//!   rishift --input ri.xlsx --output analyzed.xlsx
//!   rishift --input ri.xlsx --output analyzed.xlsx --sheet comrlp25

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    commands::cmd_analyze(&cli.input, &cli.output, &cli.sheet)
}
