//! Session state: the ordered transcript and the idle/pending flag
//!
//! The runtime task is the only writer. Observers read through snapshots and
//! the ordered [`SessionEvent`] stream.

mod state;
mod turn;

#[allow(unused_imports)] // Public API re-exports
pub use state::{SessionError, SessionEvent, SessionSnapshot, SessionState, SessionStatus};
pub use turn::{Role, Turn};
