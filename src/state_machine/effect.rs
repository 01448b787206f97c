//! Effects produced by state transitions

use crate::session::Role;

/// Effects to be executed, in order, after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append a turn to the transcript
    AppendTurn { role: Role, content: String },

    /// Write the transition's new status into session state
    CommitStatus,

    /// Empty the transcript, return to idle, start a new generation
    ClearSession,

    /// Dispatch one completion request built from the current transcript
    RequestCompletion { generation: u64 },
}

impl Effect {
    pub fn user_turn(content: impl Into<String>) -> Self {
        Effect::AppendTurn {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant_turn(content: impl Into<String>) -> Self {
        Effect::AppendTurn {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
