use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::models::ErrorDetail;
use crate::state::AppState;

pub mod ask;
pub mod context;
pub mod health;

/// Handler error: status plus a `{"detail": ...}` body.
pub type ApiError = (StatusCode, Json<ErrorDetail>);

pub(crate) fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
}

/// Build the HTTP router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/upload_context", post(context::upload_context))
        .route("/contexts", get(context::list_contexts))
        .route("/ask", post(ask::ask))
        .route("/health", get(health::health))
        .route("/config", get(health::get_config))
        .with_state(state)
}
