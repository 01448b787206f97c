//! Session runtime executor

use super::Command;
use crate::llm::{ClientError, CompletionClient};
use crate::session::{SessionEvent, SessionState, SessionStatus, Turn};
use crate::state_machine::{transition, Effect, Event, TransitionError};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// A finished completion call, tagged with the generation it was built for
#[derive(Debug)]
struct Completion {
    generation: u64,
    outcome: Result<String, ClientError>,
}

/// Owns the session state and applies transitions one at a time
pub struct SessionRuntime<C>
where
    C: CompletionClient + 'static,
{
    session: SessionState,
    client: Arc<C>,
    directive: Arc<str>,
    command_rx: mpsc::Receiver<Command>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<C> SessionRuntime<C>
where
    C: CompletionClient + 'static,
{
    pub fn new(
        client: C,
        directive: Arc<str>,
        command_rx: mpsc::Receiver<Command>,
        events_tx: broadcast::Sender<SessionEvent>,
    ) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            session: SessionState::new(events_tx),
            client: Arc::new(client),
            directive,
            command_rx,
            completion_tx,
            completion_rx,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(model = %self.client.model_id(), "Starting session runtime");

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(Command::Dispatch(event)) => self.process_event(event),
                    Some(Command::Snapshot(reply)) => {
                        let _ = reply.send(self.session.snapshot());
                    }
                    None => break,
                },
                Some(completion) = self.completion_rx.recv() => {
                    self.process_event(Event::CompletionResolved {
                        generation: completion.generation,
                        outcome: completion.outcome,
                    });
                }
            }
        }

        tracing::info!("Session runtime stopped");
    }

    fn process_event(&mut self, event: Event) {
        let result = match transition(&self.session.status(), self.session.generation(), event) {
            Ok(result) => result,
            Err(TransitionError::StaleResult { generation }) => {
                tracing::debug!(
                    generation,
                    current_generation = self.session.generation(),
                    "Discarding stale completion"
                );
                return;
            }
            Err(e) => {
                // Rejected input, not a fault
                tracing::debug!(reason = %e, "Submission dropped");
                return;
            }
        };

        for effect in result.effects {
            self.execute_effect(effect, result.new_status);
        }
    }

    fn execute_effect(&mut self, effect: Effect, new_status: SessionStatus) {
        match effect {
            Effect::AppendTurn { role, content } => {
                if let Err(e) = self.session.append_turn(Turn::new(role, content)) {
                    tracing::error!(error = %e, "Refused to append turn");
                }
            }

            Effect::CommitStatus => self.session.set_status(new_status),

            Effect::ClearSession => {
                self.session.clear();
                tracing::info!(generation = self.session.generation(), "Session reset");
            }

            Effect::RequestCompletion { generation } => self.spawn_completion(generation),
        }
    }

    /// Run one completion call in the background.
    ///
    /// The call runs in its own task so a panic inside the client still
    /// resolves the request and the session cannot stay pending.
    fn spawn_completion(&self, generation: u64) {
        let client = Arc::clone(&self.client);
        let directive = Arc::clone(&self.directive);
        let transcript = self.session.transcript().to_vec();
        let completion_tx = self.completion_tx.clone();

        tracing::info!(generation, turns = transcript.len(), "Dispatching completion request");

        tokio::spawn(async move {
            let call =
                tokio::spawn(async move { client.complete(&directive, &transcript).await });

            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "Completion task failed");
                    Err(ClientError::aborted(format!("Completion task failed: {e}")))
                }
            };

            // Receiver only goes away when the runtime has stopped
            let _ = completion_tx.send(Completion {
                generation,
                outcome,
            });
        });
    }
}
