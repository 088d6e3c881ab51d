use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::models::HealthResponse;
use crate::state::AppState;

/// GET /health - Liveness plus the stored document count
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        total_docs: state.contexts.len(),
    })
}

/// Config response with API key redacted
#[derive(Serialize)]
pub struct LlmConfigResponse {
    pub provider: String,
    pub base_url: String,
    pub chat_model: String,
    pub embedding_model: String,
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub has_api_key: bool,
}

/// GET /config - Current LLM config (API key redacted)
pub async fn get_config(State(state): State<AppState>) -> Json<LlmConfigResponse> {
    let config = &state.llm;
    Json(LlmConfigResponse {
        provider: config.provider.clone(),
        base_url: config.base_url.clone(),
        chat_model: config.chat_model.clone(),
        embedding_model: config.embedding_model.clone(),
        max_new_tokens: config.max_new_tokens,
        temperature: config.temperature,
        has_api_key: config.api_key.is_some(),
    })
}
