use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard::dashboard_get))
        .route("/health", get(handlers::system::health_get))
        .route("/info", get(handlers::system::info_get))
        .route("/static/styles.css", get(serve_stylesheet))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve_stylesheet() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        DEFAULT_STYLESHEET,
    )
}
