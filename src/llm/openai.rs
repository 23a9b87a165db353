//! OpenAI-compatible Chat Completions call (non-streaming)

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::types::{ChatMessage, LlmError};

/// Request payload
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// Response body, only the fields we read
#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Send one chat completion request and return the first choice's text
pub async fn complete_chat(
    client: &Client,
    api_key: &str,
    endpoint: &str,
    messages: &[ChatMessage],
    model: &str,
) -> Result<String, LlmError> {
    let payload = ChatCompletionRequest { model, messages };

    debug!("Chat completion request: endpoint={}, model={}", endpoint, model);

    let response = client
        .post(endpoint)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let error_text = response.text().await.unwrap_or_default();
        let preview: String = error_text.chars().take(500).collect();
        error!("Chat completion API error: status={}, body={}", status_code, preview);
        return Err(LlmError::Api {
            status: status_code,
            message: error_text,
        });
    }

    let body = response.bytes().await?;
    let parsed: ChatCompletionResponse = serde_json::from_slice(&body)?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(LlmError::EmptyResponse)
}
