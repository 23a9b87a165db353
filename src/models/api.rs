//! REST API request/response models

use serde::{Deserialize, Serialize};

/// Analysis request: one journal entry
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub entry: String,
}

/// Analysis result
///
/// Created per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub recommendation: String,
}

impl AnalysisResult {
    pub fn new(summary: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub api_key_configured: bool,
}

/// Static greeting
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
