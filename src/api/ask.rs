use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::api::{api_error, ApiError};
use crate::llm::embeddings::embed_single;
use crate::llm::extract::extract_json_object;
use crate::llm::generate::generate;
use crate::llm::prompt::build_extraction_prompt;
use crate::models::{AskFailure, AskRequest, AskResponse};
use crate::state::AppState;

/// POST /ask - Answer a question from the single most similar stored document.
///   1. Embed the question and pick the top-1 document by cosine similarity
///   2. Ask the LLM to extract the answer from that document only
///   3. Pull the JSON object out of the generated text
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    if state.contexts.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "No context has been uploaded yet.",
        ));
    }
    if req.question.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Question cannot be empty."));
    }

    // ── Step 1: Retrieval ────────────────────────────────────
    let query_embedding = embed_single(&state.http_client, &state.llm, &req.question)
        .await
        .map_err(|e| {
            tracing::error!("Embedding question failed: {e:#}");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Embedding failed: {e}"),
            )
        })?;

    let best = state.contexts.best_match(&query_embedding).ok_or_else(|| {
        api_error(
            StatusCode::BAD_REQUEST,
            "No context has been uploaded yet.",
        )
    })?;
    tracing::info!(
        "Retrieved context #{} (similarity {:.4})",
        best.index,
        best.score
    );

    // ── Step 2: Generation ───────────────────────────────────
    let prompt = build_extraction_prompt(&best.text, &req.question);
    let raw_output = generate(&state.http_client, &state.llm, &prompt)
        .await
        .map_err(|e| {
            tracing::error!("Generation failed: {e:#}");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("LLM error: {e}"))
        })?;

    // ── Step 3: Parsing ──────────────────────────────────────
    match extract_json_object(&raw_output) {
        Ok(parsed) => Ok(Json(AskResponse::Answer(with_retrieval_fields(
            parsed, best.text, best.score,
        )))),
        Err(e) => {
            tracing::warn!("Unusable model output: {e}. Raw: {raw_output}");
            Ok(Json(AskResponse::Failure(AskFailure {
                error: e.to_string(),
                raw_output,
                context_used: best.text,
            })))
        }
    }
}

/// Add `context_used` and `similarity_score` to the model's object,
/// replacing any keys of the same name the model produced.
fn with_retrieval_fields(
    mut answer: Map<String, Value>,
    context_used: String,
    similarity_score: f32,
) -> Map<String, Value> {
    answer.insert("context_used".to_string(), Value::String(context_used));
    answer.insert(
        "similarity_score".to_string(),
        Value::from(f64::from(similarity_score)),
    );
    answer
}
