//! Change classification and natural-language interpretation
//!
//! Pure functions of the percent change: a severity bucket on its absolute
//! value, and a templated sentence per bucket. The percent change is
//! interpolated signed, to two decimal places; the direction word is chosen
//! by sign.

use crate::models::ChangeCategory;

// Bucket thresholds on the absolute percent change. Boundary values belong
// to the higher-magnitude bucket (strict < on the upper test).
const STABLE_BELOW: f64 = 1.0;
const SMALL_BELOW: f64 = 5.0;
const MODERATE_BELOW: f64 = 20.0;

/// Map a percent change to its severity bucket.
///
/// Undefined (and, defensively, non-finite) changes are `Unknown`.
pub fn classify(pct_change: Option<f64>) -> ChangeCategory {
    let Some(p) = pct_change.filter(|p| p.is_finite()) else {
        return ChangeCategory::Unknown;
    };

    let a = p.abs();
    if a < STABLE_BELOW {
        ChangeCategory::Stable
    } else if a < SMALL_BELOW {
        ChangeCategory::SmallChange
    } else if a < MODERATE_BELOW {
        ChangeCategory::ModerateChange
    } else {
        ChangeCategory::LargeChange
    }
}

/// Generate the interpretation sentence for a commodity's change.
pub fn explain(name: &str, pct_change: Option<f64>) -> String {
    match pct_change.filter(|p| p.is_finite()) {
        None => format!("No valid change could be computed for {}.", name),
        Some(p) => explain_defined(name, p),
    }
}

fn explain_defined(name: &str, p: f64) -> String {
    let a = p.abs();
    if a < STABLE_BELOW {
        format!(
            "The relative importance of {} was essentially stable from 2023 to 2024, \
             changing by only {:.2}%.",
            name, p
        )
    } else if a < SMALL_BELOW {
        let direction = if p > 0.0 { "increased" } else { "decreased" };
        format!(
            "The relative importance of {} {} slightly by {:.2}% between 2023 and 2024, \
             indicating only a minor shift in its weight in the overall PPI basket.",
            name, direction, p
        )
    } else if a < MODERATE_BELOW {
        let direction = if p > 0.0 { "increase" } else { "decrease" };
        format!(
            "{} experienced a moderate {} of {:.2}% in relative importance from 2023 to 2024. \
             This suggests a noticeable shift, although not an extreme one.",
            name, direction, p
        )
    } else {
        let direction = if p > 0.0 { "increase" } else { "decrease" };
        format!(
            "{} shows a large {} in relative importance of {:.2}% from 2023 to 2024. \
             Because these values are relative-importance weights rather than prices, this \
             likely reflects changes in basket weighting or classification rather than pure \
             price movement.",
            name, direction, p
        )
    }
}
