//! API routes

mod analyze;
mod greeting;
mod health;

pub use analyze::analyze_routes;
pub use greeting::greeting_routes;
pub use health::health_routes;

use axum::Router;

use crate::state::AppState;
use std::sync::Arc;

/// Create all API routes
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(greeting_routes())
        .merge(health_routes())
        .merge(analyze_routes())
        .with_state(state)
}
