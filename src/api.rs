//! HTTP API for the advisor chat
//!
//! A thin adapter over [`SessionHandle`]: routes forward intents and expose
//! snapshots and the mutation stream. No session logic lives here.

mod handlers;
mod sse;
mod types;

pub use handlers::create_router;

use crate::runtime::SessionHandle;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub session: SessionHandle,
    pub model_id: Arc<str>,
}

impl AppState {
    pub fn new(session: SessionHandle, model_id: impl Into<Arc<str>>) -> Self {
        Self {
            session,
            model_id: model_id.into(),
        }
    }
}
