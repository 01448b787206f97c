//! Request envelope for the chat-completions endpoint

use crate::session::{Role, Turn};
use serde::Serialize;

/// Role tag on an outbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeRole {
    System,
    User,
    Assistant,
}

impl From<Role> for EnvelopeRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => EnvelopeRole::User,
            Role::Assistant => EnvelopeRole::Assistant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeMessage {
    pub role: EnvelopeRole,
    pub content: String,
}

/// One outbound request, rebuilt from scratch for every call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    pub model: String,
    pub messages: Vec<EnvelopeMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl RequestEnvelope {
    /// Directive first, then every turn in transcript order
    pub fn build(
        model: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
        directive: &str,
        transcript: &[Turn],
    ) -> Self {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(EnvelopeMessage {
            role: EnvelopeRole::System,
            content: directive.to_string(),
        });
        messages.extend(transcript.iter().map(|turn| EnvelopeMessage {
            role: turn.role().into(),
            content: turn.content().to_string(),
        }));

        Self {
            model: model.into(),
            messages,
            temperature,
            max_tokens,
        }
    }
}
