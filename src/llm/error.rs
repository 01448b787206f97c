//! Completion client error types

use thiserror::Error;

/// Failure of a completion call.
///
/// The controller treats every variant the same way; `cause` only feeds logs.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("completion service unreachable: {message}")]
    Unreachable {
        cause: UnreachableCause,
        message: String,
    },
}

impl ClientError {
    pub fn unreachable(cause: UnreachableCause, message: impl Into<String>) -> Self {
        ClientError::Unreachable {
            cause,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::unreachable(UnreachableCause::Timeout, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::unreachable(UnreachableCause::Transport, message)
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::unreachable(UnreachableCause::Status(code), message)
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::unreachable(UnreachableCause::MalformedResponse, message)
    }

    pub fn aborted(message: impl Into<String>) -> Self {
        Self::unreachable(UnreachableCause::Aborted, message)
    }

    pub fn cause(&self) -> UnreachableCause {
        match self {
            ClientError::Unreachable { cause, .. } => *cause,
        }
    }
}

/// Diagnostic detail behind an unreachable service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnreachableCause {
    /// Transport-level timeout
    Timeout,
    /// Connection, DNS, TLS or body read failure
    Transport,
    /// Non-success HTTP status
    Status(u16),
    /// Body was not JSON
    MalformedResponse,
    /// The call panicked or its task was cancelled
    Aborted,
}
