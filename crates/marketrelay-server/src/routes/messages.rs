//! Payload write/read routes used by the popup and the content script.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use marketrelay_core::Payload;
use tracing::warn;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/store-message",
            post(store_message).layer(DefaultBodyLimit::disable()),
        )
        .route("/latest-message", get(latest_message))
}

/// POST /api/store-message — replace the stored payload.
///
/// The body is read raw and uncapped, so neither a missing `Content-Type`
/// nor a long message turns into a rejection.
async fn store_message(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    match Payload::parse(&body, state.config.strict) {
        Ok(payload) => {
            state.payloads.write(payload);
            (StatusCode::OK, Json(serde_json::json!({ "success": true })))
        }
        Err(e) => {
            warn!("Rejected payload: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
    }
}

/// GET /api/latest-message — the full stored payload.
async fn latest_message(State(state): State<Arc<AppState>>) -> Json<Payload> {
    Json(state.payloads.read())
}
