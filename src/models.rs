use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upload-context request
#[derive(Debug, Clone, Deserialize)]
pub struct UploadContextRequest {
    /// The document text to be stored.
    pub doc: String,
}

/// Upload-context response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadContextResponse {
    pub status: String,
    pub total_docs: usize,
}

/// Ask request
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    /// The question to ask about the stored contexts.
    pub question: String,
}

/// Returned with HTTP 200 when the model's output could not be turned into a
/// JSON object. Carries enough to debug the prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskFailure {
    pub error: String,
    pub raw_output: String,
    pub context_used: String,
}

/// Ask response: either the model's JSON object (with `context_used` and
/// `similarity_score` added) or a failure payload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AskResponse {
    Answer(Map<String, Value>),
    Failure(AskFailure),
}

/// One row of `GET /contexts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSummary {
    pub index: usize,
    pub chars: usize,
    pub preview: String,
    pub added_at: DateTime<Utc>,
}

/// Health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub total_docs: usize,
}

/// Error body, shaped `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
