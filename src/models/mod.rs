mod capture;
mod outcome;
mod scan;

pub use capture::{CaptureMode, StillImage};
pub use outcome::{RequestOutcome, RequestToken};
pub use scan::{
    IngredientAnalysis, IngredientStatus, Level, NutritionalHighlights, RiskLevel, ScanResult,
    Verdict, UNKNOWN_PRODUCT_NAME,
};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize a field that may be null, a string, or another JSON
/// type. Only non-empty strings survive; everything else becomes `None`.
pub(crate) fn deserialize_lenient_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}
