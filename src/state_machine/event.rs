//! Events that drive the session

use crate::llm::ClientError;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User intents
    Submit {
        text: String,
    },
    Reset,

    // Completion events
    CompletionResolved {
        /// Session generation the request was built for
        generation: u64,
        outcome: Result<String, ClientError>,
    },
}

impl Event {
    pub fn submit(text: impl Into<String>) -> Self {
        Event::Submit { text: text.into() }
    }
}
