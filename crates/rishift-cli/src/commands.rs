//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use rishift_core::pipeline;

pub fn cmd_analyze(input: &Path, output: &Path, sheet: &str) -> Result<()> {
    println!("📊 Analyzing {} (sheet '{}')...", input.display(), sheet);

    let summary = pipeline::run(input, output, sheet)
        .with_context(|| format!("Failed to analyze {}", input.display()))?;

    println!("✅ Analysis complete!");
    println!("   Rows read: {}", summary.rows_read);
    println!("   Rows kept: {}", summary.rows_kept);
    println!("   Written to: {}", output.display());

    if !summary.preview.is_empty() {
        println!();
        println!("Top changes:");
        for row in &summary.preview {
            let pct = row
                .pct_change
                .map(|p| format!("{:+.2}%", p))
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "   {:>10}  {:<15}  {}",
                pct,
                row.change_category.as_str(),
                row.commodity_name
            );
        }
    }

    Ok(())
}
