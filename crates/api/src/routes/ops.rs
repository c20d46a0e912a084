//! Operations routes
//!
//! Health check for monitoring. No authentication.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Name of the configured catalog source
    pub catalog: &'static str,
}

/// Operations routes (health)
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

/// Health check endpoint
///
/// GET /health
///
/// Always returns 200 OK if the API is running. The catalog is not probed.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        catalog: state.catalog.name(),
    })
}
