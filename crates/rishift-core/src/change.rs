//! Percent change computation

use crate::classify;
use crate::models::{AnalyzedRow, CleanedRow};

/// Percent change between the two weights, at full precision.
///
/// A zero 2023 weight has no defined change; the undefined value is data,
/// not an error, and is returned as None for the classifier to handle.
pub fn percent_change(ri_2023: f64, ri_2024: f64) -> Option<f64> {
    if ri_2023 == 0.0 {
        return None;
    }
    Some((ri_2024 - ri_2023) / ri_2023 * 100.0)
}

/// Enrich a cleaned row with its change, category and interpretation.
pub fn analyze_row(row: CleanedRow) -> AnalyzedRow {
    let pct_change = percent_change(row.ri_2023, row.ri_2024);
    let change_category = classify::classify(pct_change);
    let explanation = classify::explain(&row.commodity_name, pct_change);

    AnalyzedRow {
        commodity_name: row.commodity_name,
        ri_2023: row.ri_2023,
        ri_2024: row.ri_2024,
        pct_change,
        change_category,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChangeCategory;

    #[test]
    fn test_percent_change_formula() {
        assert_eq!(percent_change(100.0, 101.0), Some(1.0));
        assert_eq!(percent_change(50.0, 25.0), Some(-50.0));
        let p = percent_change(3.0, 3.1).unwrap();
        assert!((p - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_baseline_is_undefined_not_a_panic() {
        assert_eq!(percent_change(0.0, 5.0), None);
        assert_eq!(percent_change(0.0, 0.0), None);
    }

    #[test]
    fn test_analyze_row_wires_category_and_text() {
        let analyzed = analyze_row(CleanedRow {
            commodity_name: "Corn".to_string(),
            ri_2023: 100.0,
            ri_2024: 101.0,
        });
        assert_eq!(analyzed.pct_change, Some(1.0));
        assert_eq!(analyzed.change_category, ChangeCategory::SmallChange);
        assert!(analyzed.explanation.contains("increased slightly by 1.00%"));
    }

    #[test]
    fn test_unknown_iff_change_undefined() {
        let analyzed = analyze_row(CleanedRow {
            commodity_name: "Palladium".to_string(),
            ri_2023: 0.0,
            ri_2024: 5.0,
        });
        assert_eq!(analyzed.pct_change, None);
        assert_eq!(analyzed.change_category, ChangeCategory::Unknown);
    }
}
