//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, links};
use crate::state::AppState;

/// Create the main router: the shorten endpoint and the root-level redirect.
///
/// Exact paths win over captures, so /health and /api/shorten are never
/// swallowed by the /:short_code route.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/shorten", post(links::shorten))
        .route("/:short_code", get(links::redirect))
}

/// Health check routes (exported separately to bypass heavier middleware)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
