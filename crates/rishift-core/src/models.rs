//! Domain models for rishift

use serde::{Deserialize, Serialize};

/// A raw row as read from the input table, before any validation.
///
/// Values are kept as cell text; numeric coercion happens in the cleaner so
/// that bad cells drop the row instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputRow {
    /// Optional commodity code column, captured when present but unused
    /// downstream.
    pub commodity_code: Option<String>,
    pub commodity_name: Option<String>,
    /// Relative importance weight, December 2023.
    pub ri_2023: Option<String>,
    /// Relative importance weight, December 2024.
    pub ri_2024: Option<String>,
}

/// A validated row: non-empty trimmed name, both weights parsed.
///
/// Never represents the dataset's aggregate "all commodities" total row.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRow {
    pub commodity_name: String,
    pub ri_2023: f64,
    pub ri_2024: f64,
}

/// A cleaned row enriched with its percent change, severity category and
/// generated interpretation.
///
/// `pct_change` is `None` exactly when the change is undefined (zero 2023
/// weight); that is also the only case where `change_category` is `Unknown`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedRow {
    pub commodity_name: String,
    pub ri_2023: f64,
    pub ri_2024: f64,
    pub pct_change: Option<f64>,
    pub change_category: ChangeCategory,
    pub explanation: String,
}

/// Severity buckets for a relative importance change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeCategory {
    Stable,
    #[serde(rename = "Small change")]
    SmallChange,
    #[serde(rename = "Moderate change")]
    ModerateChange,
    #[serde(rename = "Large change")]
    LargeChange,
    Unknown,
}

impl ChangeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::SmallChange => "Small change",
            Self::ModerateChange => "Moderate change",
            Self::LargeChange => "Large change",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::str::FromStr for ChangeCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stable" => Ok(Self::Stable),
            "small change" => Ok(Self::SmallChange),
            "moderate change" => Ok(Self::ModerateChange),
            "large change" => Ok(Self::LargeChange),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("Unknown change category: {}", s)),
        }
    }
}

impl std::fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
