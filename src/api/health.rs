//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};

use crate::models::HealthResponse;
use crate::state::AppState;
use std::sync::Arc;

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        api_key_configured: state.analysis.is_configured(),
    })
}

pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}
