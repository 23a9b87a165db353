//! LLM type definitions

use serde::{Deserialize, Serialize};

/// Chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: system, user, assistant
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// LLM error type
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Client could not be built from the given settings
    #[error("Config error: {0}")]
    Config(String),

    /// Response body was not valid JSON
    #[error("JSON parse failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Response decoded but carried no choices
    #[error("Response contained no choices")]
    EmptyResponse,
}

impl LlmError {
    /// HTTP status reported by the upstream, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
