//! Completion service client
//!
//! Turns the directive and transcript into a chat-completions request and
//! reduces the reply to a single text.

mod chat_completions;
mod config;
mod error;
mod types;

pub use chat_completions::{ChatCompletionsClient, SOFT_FAILURE_REPLY};
pub use config::{ConfigError, LlmConfig};
pub(crate) use config::parse_var;
#[allow(unused_imports)]
pub use error::{ClientError, UnreachableCause};
#[allow(unused_imports)] // Public API re-exports
pub use types::{EnvelopeMessage, EnvelopeRole, RequestEnvelope};

use crate::session::Turn;
use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for completion backends
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Complete the conversation. One attempt, no retries.
    async fn complete(&self, directive: &str, transcript: &[Turn]) -> Result<String, ClientError>;

    /// Get the model ID
    fn model_id(&self) -> &str;
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Arc<T> {
    async fn complete(&self, directive: &str, transcript: &[Turn]) -> Result<String, ClientError> {
        (**self).complete(directive, transcript).await
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }
}

/// Logging wrapper for completion clients
pub struct LoggingClient<C> {
    inner: C,
}

impl<C: CompletionClient> LoggingClient<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: CompletionClient> CompletionClient for LoggingClient<C> {
    async fn complete(&self, directive: &str, transcript: &[Turn]) -> Result<String, ClientError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(directive, transcript).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    model = %self.inner.model_id(),
                    duration_ms = %duration.as_millis(),
                    turns = transcript.len(),
                    reply_chars = reply.chars().count(),
                    "Completion request finished"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.inner.model_id(),
                    duration_ms = %duration.as_millis(),
                    turns = transcript.len(),
                    cause = ?e.cause(),
                    error = %e,
                    "Completion request failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        self.inner.model_id()
    }
}
