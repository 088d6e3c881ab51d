use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::{api_error, ApiError};
use crate::llm::embeddings::embed_single;
use crate::models::{ContextSummary, UploadContextRequest, UploadContextResponse};
use crate::state::AppState;

/// POST /upload_context - Embed a document and append it to the store
pub async fn upload_context(
    State(state): State<AppState>,
    Json(req): Json<UploadContextRequest>,
) -> Result<Json<UploadContextResponse>, ApiError> {
    if req.doc.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Document cannot be empty."));
    }

    let embedding = embed_single(&state.http_client, &state.llm, &req.doc)
        .await
        .map_err(|e| {
            tracing::error!("Embedding uploaded document failed: {e:#}");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Embedding failed: {e}"),
            )
        })?;

    let doc_len = req.doc.len();
    let total_docs = state.contexts.add(req.doc, embedding);
    tracing::info!("Stored context ({doc_len} bytes), {total_docs} total");

    Ok(Json(UploadContextResponse {
        status: "Context uploaded successfully".to_string(),
        total_docs,
    }))
}

/// GET /contexts - List stored documents in upload order
pub async fn list_contexts(State(state): State<AppState>) -> Json<Vec<ContextSummary>> {
    Json(state.contexts.summaries())
}
