//! Static greeting endpoints

use axum::{routing::get, Json, Router};
use std::sync::Arc;

use crate::models::MessageResponse;
use crate::state::AppState;

async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Home page",
    })
}

async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, world!",
    })
}

pub fn greeting_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/hello", get(hello))
}
