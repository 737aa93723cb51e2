//! Wire types for the analysis backend

use serde::{Deserialize, Deserializer, Serialize};

/// The backend emits `null` for fields it left unset; decode that the
/// same as an absent key.
fn null_to_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for `POST /analyze`
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    /// Free-text symptom description, sent verbatim
    pub description: String,
}

impl AnalyzeRequest {
    /// Create a request from a symptom description
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Structured analysis returned by the backend.
///
/// Every field defaults to empty: a report is accepted as long as the body
/// is JSON, and absent or null fields render blank instead of failing the
/// request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Name of the potential condition
    #[serde(default, deserialize_with = "null_to_blank")]
    pub disease_name: String,
    /// Suggested next actions
    #[serde(default, deserialize_with = "null_to_blank")]
    pub suggested_treatment: String,
    /// Reasoning behind the analysis
    #[serde(default, deserialize_with = "null_to_blank")]
    pub analysis_reasoning: String,
    /// Advisory text, displayed verbatim
    #[serde(default, deserialize_with = "null_to_blank")]
    pub disclaimer: String,
}

/// Body of `GET /` (the API banner)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerStatus {
    /// Human-readable banner message
    #[serde(default, deserialize_with = "null_to_blank")]
    pub message: String,
    /// Service state, "active" when the API is up
    #[serde(default, deserialize_with = "null_to_blank")]
    pub status: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// "ok" when the server is healthy
    #[serde(default, deserialize_with = "null_to_blank")]
    pub status: String,
}

impl HealthStatus {
    /// Whether the backend reported itself healthy
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
