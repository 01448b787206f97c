//! Completion service configuration

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration for the completion endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// Static bearer credential
    pub api_key: Option<String>,
    /// OpenAI-compatible API root, without the `/chat/completions` suffix
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let temperature = match get("ADVISOR_TEMPERATURE") {
            Some(raw) => parse_var("ADVISOR_TEMPERATURE", &raw)?,
            None => defaults.temperature,
        };
        let max_tokens = match get("ADVISOR_MAX_TOKENS") {
            Some(raw) => parse_var("ADVISOR_MAX_TOKENS", &raw)?,
            None => defaults.max_tokens,
        };
        let request_timeout = match get("ADVISOR_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_var("ADVISOR_REQUEST_TIMEOUT_SECS", &raw)?),
            None => defaults.request_timeout,
        };

        Ok(Self {
            api_key: get("GROQ_API_KEY"),
            base_url: get("ADVISOR_BASE_URL").unwrap_or(defaults.base_url),
            model: get("ADVISOR_MODEL").unwrap_or(defaults.model),
            temperature,
            max_tokens,
            request_timeout,
        })
    }

    /// Full URL of the chat-completions endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

pub(crate) fn parse_var<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
    })
}
