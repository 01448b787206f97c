//! `OpenAI`-compatible chat-completions client (Groq by default)

use super::config::{ConfigError, LlmConfig};
use super::types::RequestEnvelope;
use super::{ClientError, CompletionClient};
use crate::session::Turn;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Reply used when the service answers but gives no usable text
pub const SOFT_FAILURE_REPLY: &str = "I could not process that. Please try again.";

/// Response bodies quoted in error messages are cut to this many chars
const ERROR_BODY_PREVIEW_CHARS: usize = 256;

pub struct ChatCompletionsClient {
    client: Client,
    config: LlmConfig,
    endpoint: String,
}

impl ChatCompletionsClient {
    pub fn new(config: LlmConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            config,
        })
    }

    fn build_envelope(&self, directive: &str, transcript: &[Turn]) -> RequestEnvelope {
        RequestEnvelope::build(
            &self.config.model,
            self.config.temperature,
            self.config.max_tokens,
            directive,
            transcript,
        )
    }

    /// Pull `choices[0].message.content` out of a decoded body.
    /// Missing, non-string and empty content all yield `None`.
    fn extract_reply(body: &Value) -> Option<String> {
        body.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}

fn body_preview(body: &str) -> String {
    let mut chars = body.chars();
    let preview: String = chars.by_ref().take(ERROR_BODY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{preview}... ({} bytes)", body.len())
    } else {
        preview
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionsClient {
    async fn complete(&self, directive: &str, transcript: &[Turn]) -> Result<String, ClientError> {
        let envelope = self.build_envelope(directive, transcript);

        let mut request = self.client.post(&self.endpoint).json(&envelope);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::timeout(format!("Request timeout: {e}"))
            } else {
                ClientError::transport(format!("Request failed: {e}"))
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::timeout(format!("Timed out reading response: {e}"))
            } else {
                ClientError::transport(format!("Failed to read response: {e}"))
            }
        })?;

        if !status.is_success() {
            return Err(ClientError::status(
                status.as_u16(),
                format!("HTTP {status}: {}", body_preview(&body)),
            ));
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            ClientError::malformed_response(format!(
                "Failed to parse response: {e} - body: {}",
                body_preview(&body)
            ))
        })?;

        Ok(Self::extract_reply(&value).unwrap_or_else(|| {
            tracing::warn!(model = %self.config.model, "Response carried no completion text");
            SOFT_FAILURE_REPLY.to_string()
        }))
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}
