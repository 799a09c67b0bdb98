//! Pipeline orchestration: load → clean → analyze → sort → write

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::change;
use crate::clean;
use crate::error::Result;
use crate::load;
use crate::models::AnalyzedRow;
use crate::write;

/// How many rows the run summary previews.
const PREVIEW_ROWS: usize = 10;

/// Row counts and preview for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    /// Rows read from the input table (excluding the header).
    pub rows_read: usize,
    /// Rows surviving data quality filtering.
    pub rows_kept: usize,
    /// Rows written to the output table.
    pub rows_written: usize,
    /// Top rows by the output sort order, for display.
    pub preview: Vec<AnalyzedRow>,
}

/// Run the full analysis over one input resource.
///
/// The output's parent directory is created if needed. Fatal conditions
/// (unreadable input, missing columns, unwritable output) abort the run;
/// row-level irregularities are absorbed by the cleaner and classifier.
pub fn run(input: &Path, output: &Path, sheet: &str) -> Result<PipelineSummary> {
    let raw = load::load_table(input, sheet)?;
    let rows_read = raw.len();

    let cleaned = clean::clean_rows(raw);
    let rows_kept = cleaned.len();

    let mut analyzed: Vec<AnalyzedRow> = cleaned.into_iter().map(change::analyze_row).collect();
    sort_rows(&mut analyzed);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    write::write_table(output, &analyzed)?;

    info!(
        "Analyzed {} of {} rows into {}",
        rows_kept,
        rows_read,
        output.display()
    );

    let preview = analyzed.iter().take(PREVIEW_ROWS).cloned().collect();
    Ok(PipelineSummary {
        rows_read,
        rows_kept,
        rows_written: analyzed.len(),
        preview,
    })
}

/// Sort by percent change, largest first.
///
/// Rows with an undefined change sort after all defined values (including
/// large negative ones). The sort is stable, so ties keep input order.
pub fn sort_rows(rows: &mut [AnalyzedRow]) {
    rows.sort_by(|a, b| match (a.pct_change, b.pct_change) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChangeCategory;

    fn analyzed(name: &str, pct_change: Option<f64>) -> AnalyzedRow {
        AnalyzedRow {
            commodity_name: name.to_string(),
            ri_2023: 1.0,
            ri_2024: 1.0,
            pct_change,
            change_category: ChangeCategory::Stable,
            explanation: String::new(),
        }
    }

    #[test]
    fn test_sort_descending_with_unknown_last() {
        let mut rows = vec![
            analyzed("undefined", None),
            analyzed("down big", Some(-60.0)),
            analyzed("up", Some(12.0)),
            analyzed("flat", Some(0.1)),
        ];
        sort_rows(&mut rows);

        let order: Vec<&str> = rows.iter().map(|r| r.commodity_name.as_str()).collect();
        // Unknown sorts after every defined value, even large negatives.
        assert_eq!(order, vec!["up", "flat", "down big", "undefined"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut rows = vec![
            analyzed("first", Some(5.0)),
            analyzed("second", Some(5.0)),
            analyzed("u1", None),
            analyzed("u2", None),
        ];
        sort_rows(&mut rows);

        let order: Vec<&str> = rows.iter().map(|r| r.commodity_name.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "u1", "u2"]);
    }
}
