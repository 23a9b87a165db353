//! Journal analysis endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{AnalysisResult, AnalyzeRequest};
use crate::state::AppState;

/// Analyze a journal entry
///
/// Upstream and configuration failures still answer 200 with placeholder text;
/// only a malformed body is rejected.
async fn analyze_entry(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> AppResult<Json<AnalysisResult>> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(state.analysis.analyze(&req.entry).await))
}

pub fn analyze_routes() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze_entry))
}
