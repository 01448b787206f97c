//! Server bootstrap configuration

use crate::llm::{parse_var, ConfigError};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;

/// Settings for the HTTP adapter and the session it serves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// File replacing the built-in directive
    pub directive_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let port = match get("ADVISOR_PORT") {
            Some(raw) => parse_var("ADVISOR_PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            directive_path: get("ADVISOR_DIRECTIVE_PATH").map(PathBuf::from),
        })
    }
}
