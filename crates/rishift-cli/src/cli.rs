//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::Parser;

/// rishift - Analyze year-over-year shifts in PPI relative importance weights
#[derive(Parser)]
#[command(name = "rishift")]
#[command(about = "PPI relative importance shift analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input table (.xlsx or .csv)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output table (.xlsx or .csv); parent directories are created
    #[arg(short, long)]
    pub output: PathBuf,

    /// Worksheet to read from an xlsx input (ignored for csv)
    #[arg(short, long, default_value = "comrlp25")]
    pub sheet: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
