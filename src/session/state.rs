//! Session state and its mutation rules

use super::turn::{Role, Turn};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::broadcast;

/// Whether a completion request is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    Pending,
}

impl SessionStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, SessionStatus::Pending)
    }
}

/// Mutations published to observers, in the order they were applied
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    TurnAppended { revision: u64, turn: Turn },
    StatusChanged { revision: u64, status: SessionStatus },
    Cleared { revision: u64 },
}

impl SessionEvent {
    pub fn revision(&self) -> u64 {
        match self {
            SessionEvent::TurnAppended { revision, .. }
            | SessionEvent::StatusChanged { revision, .. }
            | SessionEvent::Cleared { revision } => *revision,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::TurnAppended { .. } => "turn_appended",
            SessionEvent::StatusChanged { .. } => "status_changed",
            SessionEvent::Cleared { .. } => "cleared",
        }
    }
}

/// Point-in-time copy of the session for readers
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SessionSnapshot {
    pub transcript: Vec<Turn>,
    pub status: SessionStatus,
    /// Revision of the last mutation reflected in this snapshot
    pub revision: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("user turns must have non-empty content")]
    EmptyUserTurn,
}

/// The transcript, the status flag, and the counters that order them.
///
/// Every mutation bumps `revision` and is broadcast before the method returns,
/// so observers see changes in exactly the order they happened.
pub struct SessionState {
    transcript: Vec<Turn>,
    status: SessionStatus,
    /// Number of `clear()` calls so far
    generation: u64,
    revision: u64,
    events_tx: broadcast::Sender<SessionEvent>,
}

impl SessionState {
    pub fn new(events_tx: broadcast::Sender<SessionEvent>) -> Self {
        Self {
            transcript: Vec::new(),
            status: SessionStatus::Idle,
            generation: 0,
            revision: 0,
            events_tx,
        }
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[allow(dead_code)] // Read through snapshots outside tests
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            transcript: self.transcript.clone(),
            status: self.status,
            revision: self.revision,
        }
    }

    pub(crate) fn append_turn(&mut self, turn: Turn) -> Result<(), SessionError> {
        if turn.role() == Role::User && turn.content().is_empty() {
            return Err(SessionError::EmptyUserTurn);
        }
        self.transcript.push(turn.clone());
        let revision = self.bump_revision();
        self.publish(SessionEvent::TurnAppended { revision, turn });
        Ok(())
    }

    pub(crate) fn set_status(&mut self, status: SessionStatus) {
        if self.status == status {
            return;
        }
        self.status = status;
        let revision = self.bump_revision();
        self.publish(SessionEvent::StatusChanged { revision, status });
    }

    /// Empty the transcript and return to idle in one step
    pub(crate) fn clear(&mut self) {
        self.transcript.clear();
        self.status = SessionStatus::Idle;
        self.generation += 1;
        let revision = self.bump_revision();
        self.publish(SessionEvent::Cleared { revision });
    }

    fn bump_revision(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.events_tx.send(event);
    }
}
