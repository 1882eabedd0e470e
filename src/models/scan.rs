use serde::{Deserialize, Deserializer, Serialize};

use super::deserialize_lenient_string;

/// Product name the analysis service reports when it has none.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// The service's categorical health judgment for a scanned product.
///
/// Always one of four values. Raw values are matched case-insensitively and
/// anything unrecognized (including the service's own `"ERROR"` marker or a
/// missing field) becomes [`Verdict::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Safe,
    Caution,
    Avoid,
    #[default]
    Unknown,
}

impl Verdict {
    /// Normalize a raw service value.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "SAFE" => Verdict::Safe,
            "CAUTION" => Verdict::Caution,
            "AVOID" => Verdict::Avoid,
            _ => Verdict::Unknown,
        }
    }

    /// Upper-case display label.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Safe => "SAFE",
            Verdict::Caution => "CAUTION",
            Verdict::Avoid => "AVOID",
            Verdict::Unknown => "UNKNOWN",
        }
    }
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::String(s)) => Verdict::from_raw(&s),
            _ => Verdict::Unknown,
        })
    }
}

/// Per-ingredient judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IngredientStatus {
    Risky,
    /// Also used for values the service sends that we don't recognize
    #[default]
    Caution,
    Safe,
}

impl IngredientStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "RISKY" => IngredientStatus::Risky,
            "SAFE" => IngredientStatus::Safe,
            _ => IngredientStatus::Caution,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IngredientStatus::Risky => "RISKY",
            IngredientStatus::Caution => "CAUTION",
            IngredientStatus::Safe => "SAFE",
        }
    }
}

impl<'de> Deserialize<'de> for IngredientStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::String(s)) => IngredientStatus::from_raw(&s),
            _ => IngredientStatus::default(),
        })
    }
}

/// One row of the ingredient breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientAnalysis {
    pub name: String,
    #[serde(default)]
    pub status: IngredientStatus,
    /// Brief justification for the status
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub reason: Option<String>,
}

impl IngredientAnalysis {
    pub fn new(name: impl Into<String>, status: IngredientStatus) -> Self {
        Self {
            name: name.into(),
            status,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Overall risk rating reported next to the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LOW" => Some(RiskLevel::Low),
            "MEDIUM" => Some(RiskLevel::Medium),
            "HIGH" => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Low/moderate/high scale used by the nutrition highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Low,
    Moderate,
    High,
}

impl Level {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LOW" => Some(Level::Low),
            "MODERATE" | "MEDIUM" => Some(Level::Moderate),
            "HIGH" => Some(Level::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "LOW",
            Level::Moderate => "MODERATE",
            Level::High => "HIGH",
        }
    }
}

fn deserialize_risk_level<'de, D>(deserializer: D) -> Result<Option<RiskLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_lenient_string(deserializer)?.and_then(|s| RiskLevel::from_raw(&s)))
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Option<Level>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_lenient_string(deserializer)?.and_then(|s| Level::from_raw(&s)))
}

/// Sugar, sodium and processing highlights.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NutritionalHighlights {
    #[serde(default, deserialize_with = "deserialize_level")]
    pub sugar: Option<Level>,
    #[serde(default, deserialize_with = "deserialize_level")]
    pub sodium: Option<Level>,
    /// Processing class, e.g. "NOVA1"
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub processing: Option<String>,
}

impl NutritionalHighlights {
    pub fn is_empty(&self) -> bool {
        self.sugar.is_none() && self.sodium.is_none() && self.processing.is_none()
    }
}

fn default_product_name() -> String {
    UNKNOWN_PRODUCT_NAME.to_string()
}

fn deserialize_product_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_lenient_string(deserializer)?.unwrap_or_else(default_product_name))
}

/// `null` is an empty list; any other non-array value is a decode error.
fn deserialize_ingredients<'de, D>(deserializer: D) -> Result<Vec<IngredientAnalysis>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<IngredientAnalysis>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_highlights<'de, D>(
    deserializer: D,
) -> Result<Option<NutritionalHighlights>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(v @ serde_json::Value::Object(_)) => serde_json::from_value::<NutritionalHighlights>(v)
            .ok()
            .filter(|h| !h.is_empty()),
        _ => None,
    })
}

/// Structured verdict returned by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(
        default = "default_product_name",
        deserialize_with = "deserialize_product_name",
        alias = "productName"
    )]
    pub product_name: String,
    #[serde(default)]
    pub verdict: Verdict,
    /// Required: a payload without an explanation is not a verdict
    pub explanation: String,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        alias = "imageUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_ingredients",
        alias = "ingredientsAnalysis"
    )]
    pub ingredients_analysis: Vec<IngredientAnalysis>,
    #[serde(
        default,
        deserialize_with = "deserialize_risk_level",
        alias = "riskLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_level: Option<RiskLevel>,
    #[serde(
        default,
        deserialize_with = "deserialize_highlights",
        alias = "nutritionalHighlights",
        skip_serializing_if = "Option::is_none"
    )]
    pub nutritional_highlights: Option<NutritionalHighlights>,
}

impl ScanResult {
    pub fn new(
        product_name: impl Into<String>,
        verdict: Verdict,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            verdict,
            explanation: explanation.into(),
            image_url: None,
            ingredients_analysis: Vec::new(),
            risk_level: None,
            nutritional_highlights: None,
        }
    }

    pub fn with_ingredient(mut self, ingredient: IngredientAnalysis) -> Self {
        self.ingredients_analysis.push(ingredient);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
