//! Row cleaning: data quality filtering ahead of analysis

use tracing::debug;

use crate::models::{CleanedRow, InputRow};

/// Case-insensitive marker for the dataset's aggregate total row.
const AGGREGATE_MARKER: &str = "all commodities";

/// Filter raw rows down to analyzable ones.
///
/// Order is preserved; rows are only ever dropped, never added. Drops are
/// silent (data quality filtering, not failures); counts go to debug logs.
pub fn clean_rows(rows: Vec<InputRow>) -> Vec<CleanedRow> {
    let total = rows.len();
    let mut cleaned = Vec::with_capacity(total);

    for row in rows {
        let Some(name) = row.commodity_name else {
            continue;
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            continue;
        }

        // The "all commodities" row is the basket-wide total, not a
        // commodity.
        if name.to_lowercase().contains(AGGREGATE_MARKER) {
            continue;
        }

        let (Some(ri_2023), Some(ri_2024)) = (
            row.ri_2023.as_deref().and_then(parse_weight),
            row.ri_2024.as_deref().and_then(parse_weight),
        ) else {
            continue;
        };

        cleaned.push(CleanedRow {
            commodity_name: name,
            ri_2023,
            ri_2024,
        });
    }

    debug!("Cleaned {} rows down to {}", total, cleaned.len());
    cleaned
}

/// Parse a relative importance weight, handling thousands separators.
///
/// Returns None for anything non-numeric or non-finite.
pub fn parse_weight(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().replace([',', ' '], "");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
