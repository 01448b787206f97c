//! Pure state transition function
//!
//! Given the same status, generation and event it always produces the same
//! result, with no I/O.

use super::{Effect, Event};
use crate::session::SessionStatus;
use thiserror::Error;

/// Reply appended when the completion service could not be reached
pub const CONNECTION_ERROR_REPLY: &str = "Connection error. Check your API key and try again.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_status: SessionStatus,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(status: SessionStatus) -> Self {
        Self {
            new_status: status,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Events the session declines. None of these reach the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Submission is empty after trimming")]
    EmptySubmission,
    #[error("A completion request is already outstanding")]
    SessionBusy,
    #[error("Completion for generation {generation} is stale")]
    StaleResult { generation: u64 },
}

/// Pure transition function.
///
/// `generation` is the session's current generation; a completion is only
/// applied if it was dispatched in that generation and the session is still
/// waiting for it.
pub fn transition(
    status: &SessionStatus,
    generation: u64,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (status, event) {
        // ============================================================
        // Submission
        // ============================================================
        (status, Event::Submit { text }) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(TransitionError::EmptySubmission);
            }
            if status.is_pending() {
                return Err(TransitionError::SessionBusy);
            }
            Ok(TransitionResult::new(SessionStatus::Pending)
                .with_effect(Effect::user_turn(text))
                .with_effect(Effect::CommitStatus)
                .with_effect(Effect::RequestCompletion { generation }))
        }

        // ============================================================
        // Completion
        // ============================================================
        (
            SessionStatus::Pending,
            Event::CompletionResolved {
                generation: dispatched,
                outcome,
            },
        ) if dispatched == generation => {
            let reply = outcome.unwrap_or_else(|_| CONNECTION_ERROR_REPLY.to_string());
            Ok(TransitionResult::new(SessionStatus::Idle)
                .with_effect(Effect::assistant_turn(reply))
                .with_effect(Effect::CommitStatus))
        }

        (_, Event::CompletionResolved { generation, .. }) => {
            Err(TransitionError::StaleResult { generation })
        }

        // ============================================================
        // Reset
        // ============================================================
        (_, Event::Reset) => {
            Ok(TransitionResult::new(SessionStatus::Idle).with_effect(Effect::ClearSession))
        }
    }
}
