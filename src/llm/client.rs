//! Chat completions client

use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::format::build_chat_endpoint;
use super::openai::complete_chat;
use super::types::{ChatMessage, LlmError};

/// Connect timeout, independent of the overall request timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// LLM client
///
/// Holds one pooled HTTP client plus the bearer credential. Cheap to clone.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl LlmClient {
    /// Create a client; an empty key is a configuration error
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::Config("API Key is required".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::Http)?;

        Ok(Self {
            client,
            api_key,
            endpoint: build_chat_endpoint(base_url),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Single non-streaming chat completion; returns the reply text
    pub async fn chat(&self, messages: &[ChatMessage], model: &str) -> Result<String, LlmError> {
        info!(
            "LLM request: model={}, messages={}, timeout={}s",
            model,
            messages.len(),
            self.timeout.as_secs()
        );

        complete_chat(
            &self.client,
            &self.api_key,
            &self.endpoint,
            messages,
            model,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_upstream;
    use axum::http::StatusCode;
    use serde_json::json;

    fn client_for(base_url: &str) -> LlmClient {
        LlmClient::new("test-key", base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = LlmClient::new("", "https://openrouter.ai/api", Duration::from_secs(5));
        assert!(matches!(err, Err(LlmError::Config(_))));

        let err = LlmClient::new("   ", "https://openrouter.ai/api", Duration::from_secs(5));
        assert!(matches!(err, Err(LlmError::Config(_))));
    }

    #[test]
    fn test_endpoint_normalised() {
        let client = client_for("https://openrouter.ai/api/");
        assert_eq!(client.endpoint(), "https://openrouter.ai/api/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_chat_returns_first_choice() {
        let upstream = spawn_upstream(
            StatusCode::OK,
            json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "first"}},
                    {"message": {"role": "assistant", "content": "second"}}
                ]
            })
            .to_string(),
        )
        .await;

        let reply = client_for(&upstream.base_url)
            .chat(&[ChatMessage::user("hi")], "test-model")
            .await
            .unwrap();
        assert_eq!(reply, "first");
    }

    #[tokio::test]
    async fn test_chat_sends_bearer_and_messages() {
        let upstream = spawn_upstream(
            StatusCode::OK,
            json!({"choices": [{"message": {"content": "ok"}}]}).to_string(),
        )
        .await;

        let messages = vec![ChatMessage::system("rules"), ChatMessage::user("entry")];
        client_for(&upstream.base_url)
            .chat(&messages, "test-model")
            .await
            .unwrap();

        let seen = upstream.last_request().expect("upstream saw a request");
        assert_eq!(seen.path, "/v1/chat/completions");
        assert_eq!(seen.authorization.as_deref(), Some("Bearer test-key"));
        assert_eq!(seen.body["model"], "test-model");
        assert_eq!(seen.body["messages"][0]["role"], "system");
        assert_eq!(seen.body["messages"][1]["content"], "entry");
        assert_eq!(seen.body.as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_chat_non_success_status() {
        let upstream =
            spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()).await;

        let err = client_for(&upstream.base_url)
            .chat(&[ChatMessage::user("hi")], "test-model")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(matches!(err, LlmError::Api { ref message, .. } if message == "boom"));
    }

    #[tokio::test]
    async fn test_chat_malformed_body() {
        let upstream = spawn_upstream(StatusCode::OK, "not json".to_string()).await;
        let err = client_for(&upstream.base_url)
            .chat(&[ChatMessage::user("hi")], "test-model")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Json(_)));

        let upstream = spawn_upstream(StatusCode::OK, json!({"choices": []}).to_string()).await;
        let err = client_for(&upstream.base_url)
            .chat(&[ChatMessage::user("hi")], "test-model")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }
}
