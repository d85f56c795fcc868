//! Landing page and favicon.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/favicon.ico", get(favicon))
}

/// GET / — static page for composing a payload by hand.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /favicon.ico — no icon, no body.
async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
