//! Request/response DTOs for the idea validation endpoints

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::validation::{ConversationStatus, StartupIdea};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /validate`.
///
/// Every field may be absent or null. A number or boolean is kept as its
/// JSON text; an array or object reads as empty. One odd field never costs
/// the others.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidateIdeaRequest {
    #[serde(deserialize_with = "lenient_text")]
    pub user_input: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub problem: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub target_customers: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub solution: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub key_resources: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub revenue_streams: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        scalar @ (Value::Number(_) | Value::Bool(_)) => Some(scalar.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

impl From<ValidateIdeaRequest> for StartupIdea {
    fn from(req: ValidateIdeaRequest) -> Self {
        Self {
            user_input: req.user_input.unwrap_or_default(),
            problem: req.problem.unwrap_or_default(),
            target_customers: req.target_customers.unwrap_or_default(),
            solution: req.solution.unwrap_or_default(),
            key_resources: req.key_resources.unwrap_or_default(),
            revenue_streams: req.revenue_streams.unwrap_or_default(),
        }
    }
}

/// Body of `POST /confirm`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfirmRequest {
    pub confirmation: Option<String>,
    pub original_data: Value,
}

/// A request body that could not be read as the expected JSON shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestBodyError {
    #[error("Malformed request body: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for RequestBodyError {
    fn from(err: serde_json::Error) -> Self {
        RequestBodyError::Malformed(err.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ValidateIdeaResponse {
    pub response: String,
    pub status: ConversationStatus,
    pub original_data: StartupIdea,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmResponse {
    pub response: String,
    pub status: ConversationStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: String,
    pub model: String,
}

/// Error body shared by every endpoint: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
