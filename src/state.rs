//! Application state
//!
//! State shared between request handlers. Nothing in it is mutated after
//! startup, so handlers need no locking.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::LlmError;
use crate::services::AnalysisService;

pub struct AppState {
    pub analysis: AnalysisService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, LlmError> {
        Ok(Self {
            analysis: AnalysisService::new(config)?,
        })
    }
}

/// Create the shared application state
pub fn create_shared_state(config: &AppConfig) -> Result<Arc<AppState>, LlmError> {
    Ok(Arc::new(AppState::new(config)?))
}
