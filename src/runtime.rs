//! Session controller runtime
//!
//! One task owns the session state and consumes intents from an ordered
//! channel, so writes never race. Completion calls run as separate tasks and
//! report back onto the same loop.

mod executor;


pub use executor::SessionRuntime;

use crate::llm::CompletionClient;
use crate::session::{SessionEvent, SessionSnapshot};
use crate::state_machine::Event;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, oneshot};

const COMMAND_BUFFER: usize = 32;
const EVENT_BUFFER: usize = 128;

/// Requests accepted by the runtime loop
#[derive(Debug)]
pub enum Command {
    Dispatch(Event),
    Snapshot(oneshot::Sender<SessionSnapshot>),
}

#[derive(Debug, Error)]
#[error("Session runtime has stopped")]
pub struct RuntimeStopped;

/// Handle the presentation layer uses to drive and observe the session
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<SessionEvent>,
}

impl SessionHandle {
    /// Submit user text. Blank text, or text sent while a request is
    /// outstanding, is dropped without any state change.
    pub async fn submit(&self, text: impl Into<String>) {
        self.dispatch(Event::submit(text)).await;
    }

    /// Clear the transcript and return to idle. Any outstanding request is
    /// left to finish and its result is discarded.
    pub async fn reset(&self) {
        self.dispatch(Event::Reset).await;
    }

    /// Current transcript and status, ordered after every intent sent before it
    pub async fn snapshot(&self) -> Result<SessionSnapshot, RuntimeStopped> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::Snapshot(reply_tx))
            .await
            .map_err(|_| RuntimeStopped)?;
        reply_rx.await.map_err(|_| RuntimeStopped)
    }

    /// Subscribe to every mutation from now on
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }

    async fn dispatch(&self, event: Event) {
        if self.command_tx.send(Command::Dispatch(event)).await.is_err() {
            tracing::warn!("Session runtime has stopped; intent dropped");
        }
    }
}

/// Start a session runtime in the background and return its handle.
///
/// The runtime stops once every handle has been dropped.
pub fn spawn_session<C>(client: C, directive: impl Into<Arc<str>>) -> SessionHandle
where
    C: CompletionClient + 'static,
{
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (events_tx, _) = broadcast::channel(EVENT_BUFFER);

    let runtime = SessionRuntime::new(client, directive.into(), command_rx, events_tx.clone());
    tokio::spawn(async move {
        runtime.run().await;
    });

    SessionHandle {
        command_tx,
        events_tx,
    }
}
