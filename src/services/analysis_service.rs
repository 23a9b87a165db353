//! Mood analysis service
//!
//! Runs prompt building, the LLM call and reply extraction for one entry. Every
//! failure is folded into a placeholder result instead of an error status.

use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::prompt_service::PromptService;
use super::response_extractor::extract_sections;
use crate::config::AppConfig;
use crate::llm::{LlmClient, LlmError};
use crate::models::AnalysisResult;

/// Why an analysis fell back to a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// No API key; no request was sent
    NotConfigured,
    /// Upstream returned a non-success status
    RequestFailed,
    /// Transport error, timeout or unreadable reply
    ProcessingFailed,
}

impl AnalysisFailure {
    pub fn placeholder(self) -> AnalysisResult {
        match self {
            AnalysisFailure::NotConfigured => AnalysisResult::new(
                "API key not configured",
                "Please check your environment variables",
            ),
            AnalysisFailure::RequestFailed => {
                AnalysisResult::new("API request failed", "Please try again later")
            }
            AnalysisFailure::ProcessingFailed => {
                AnalysisResult::new("Error processing request", "Please try again")
            }
        }
    }
}

impl From<&LlmError> for AnalysisFailure {
    fn from(err: &LlmError) -> Self {
        match err {
            LlmError::Config(_) => AnalysisFailure::NotConfigured,
            LlmError::Api { .. } => AnalysisFailure::RequestFailed,
            LlmError::Http(_) | LlmError::Json(_) | LlmError::EmptyResponse => {
                AnalysisFailure::ProcessingFailed
            }
        }
    }
}

/// Mood analysis service
///
/// Immutable after construction; shared across requests.
pub struct AnalysisService {
    client: Option<LlmClient>,
    prompts: PromptService,
    model: String,
}

impl AnalysisService {
    /// Build from config. A missing key is tolerated and leaves the service
    /// unconfigured; a client that cannot be built is an error.
    pub fn new(config: &AppConfig) -> Result<Self, LlmError> {
        let client = match config.api_key() {
            Some(key) => {
                let client = LlmClient::new(key, &config.base_url, config.timeout())?;
                info!("LLM client ready: endpoint={}, model={}", client.endpoint(), config.model);
                Some(client)
            }
            None => None,
        };

        Ok(Self {
            client,
            prompts: PromptService::new(),
            model: config.model.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Analyze one entry, reporting which failure occurred
    pub async fn try_analyze(&self, entry: &str) -> Result<AnalysisResult, AnalysisFailure> {
        let client = self.client.as_ref().ok_or_else(|| {
            warn!("Analysis skipped: API key not configured");
            AnalysisFailure::NotConfigured
        })?;

        let request_id = generate_request_id();
        let start = Instant::now();
        let messages = self.prompts.build_analysis_messages(entry);
        info!(
            "Analysis started: request_id={}, model={}, entry_chars={}",
            request_id,
            self.model,
            entry.chars().count()
        );

        let reply = client
            .chat(&messages, &self.model)
            .await
            .map_err(|e| {
                let failure = AnalysisFailure::from(&e);
                error!(
                    "Analysis failed: request_id={}, failure={:?}, status={:?}, error={}",
                    request_id,
                    failure,
                    e.status(),
                    e
                );
                failure
            })?;

        debug!("Raw model reply: request_id={}, reply={:?}", request_id, reply);
        let result = extract_sections(&reply);
        info!(
            "Analysis completed: request_id={}, duration_ms={}, has_recommendation={}",
            request_id,
            start.elapsed().as_millis(),
            !result.recommendation.is_empty()
        );
        Ok(result)
    }

    /// Analyze one entry; failures become placeholder results
    pub async fn analyze(&self, entry: &str) -> AnalysisResult {
        self.try_analyze(entry)
            .await
            .unwrap_or_else(AnalysisFailure::placeholder)
    }
}

/// Short id to correlate log lines of one analysis
fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
