use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classification label returned by the Analysis Service.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Maps a wire value to a label. Anything other than the two known
    /// non-neutral labels collapses to `Neutral`, so rendering is total
    /// even when the service grows new labels.
    pub fn parse(value: &str) -> Self {
        match value {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// One analyzed review, as held in application state. Instances only
/// enter state through [`ReviewRecord::from_value`], so every field is
/// already normalized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub id: String,                   // Server-assigned, opaque
    pub review_text: String,
    pub product_name: Option<String>, // Pass-through metadata
    pub skin_type: Option<String>,    // Pass-through metadata
    pub sentiment: Sentiment,
    pub confidence: f64,              // Always within [0, 1]
    pub key_points: Vec<String>,      // Possibly empty, never absent
    pub created_at: Option<String>,   // ISO-8601, display only
}

impl ReviewRecord {
    /// Normalizing boundary between the wire and application state.
    ///
    /// The service's response shapes have drifted over time (numeric vs
    /// string ids, absent or malformed `key_points`), so every field is
    /// coerced to a safe default instead of trusting the shape:
    /// - `id`: number or string, stringified
    /// - `sentiment`: unknown or missing values become `Neutral`
    /// - `confidence`: clamped into `[0, 1]`, defaults to `0.0`
    /// - `key_points`: anything but an array of strings becomes empty
    pub fn from_value(value: &Value) -> Self {
        let id = match value.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let sentiment = value
            .get("sentiment")
            .and_then(Value::as_str)
            .map(Sentiment::parse)
            .unwrap_or_default();

        let confidence = value
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);

        let key_points = match value.get("key_points") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        ReviewRecord {
            id,
            review_text: string_field(value, "review_text"),
            product_name: optional_string_field(value, "product_name"),
            skin_type: optional_string_field(value, "skin_type"),
            sentiment,
            confidence,
            key_points,
            created_at: optional_string_field(value, "created_at"),
        }
    }

    /// Normalizes a history response. A body that is not a JSON array
    /// yields `None` so the caller can surface an error instead of
    /// rendering garbage.
    pub fn list_from_value(value: &Value) -> Option<Vec<Self>> {
        value
            .as_array()
            .map(|items| items.iter().map(Self::from_value).collect())
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn optional_string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Body of `POST /api/analyze-review`. Optional metadata is omitted
/// entirely when the user left it blank.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub review_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(review_text: impl Into<String>) -> Self {
        Self {
            review_text: review_text.into(),
            product_name: None,
            skin_type: None,
        }
    }
}

/// Response of `GET /api/health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub sentiment_model_loaded: bool,
    #[serde(default)]
    pub gemini_configured: bool,
}
