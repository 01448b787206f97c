//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::llm::ClientError;
use crate::session::{Role, SessionStatus};
use proptest::prelude::*;

// ============================================================================
// Model
// ============================================================================

/// Minimal session model that applies effects the way the runtime does
#[derive(Debug, Default)]
struct Model {
    status: SessionStatus,
    generation: u64,
    transcript: Vec<(Role, String)>,
    in_flight: Vec<u64>,
}

impl Model {
    fn apply(&mut self, result: TransitionResult) {
        for effect in result.effects {
            match effect {
                Effect::AppendTurn { role, content } => self.transcript.push((role, content)),
                Effect::CommitStatus => self.status = result.new_status,
                Effect::ClearSession => {
                    self.transcript.clear();
                    self.status = SessionStatus::Idle;
                    self.generation += 1;
                }
                Effect::RequestCompletion { generation } => self.in_flight.push(generation),
            }
        }
    }

    fn feed(&mut self, event: Event) -> Result<(), TransitionError> {
        let result = transition(&self.status, self.generation, event)?;
        self.apply(result);
        Ok(())
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{1,20}",
        Just(String::new()),
        "[ \t\n]{1,5}",
    ]
}

fn arb_outcome() -> impl Strategy<Value = Result<String, ClientError>> {
    prop_oneof![
        "[a-zA-Z ]{0,20}".prop_map(Ok::<String, ClientError>),
        Just(Err(ClientError::transport("connection refused"))),
        Just(Err(ClientError::timeout("timed out"))),
    ]
}

#[derive(Debug, Clone)]
enum Step {
    Submit(String),
    Reset,
    /// Resolve the oldest outstanding request
    Resolve(Result<String, ClientError>),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => arb_text().prop_map(Step::Submit),
        1 => Just(Step::Reset),
        2 => arb_outcome().prop_map(Step::Resolve),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // At most one request is ever outstanding for the live generation
    #[test]
    fn prop_one_request_in_flight(steps in proptest::collection::vec(arb_step(), 0..40)) {
        let mut model = Model::default();

        for step in steps {
            match step {
                Step::Submit(text) => { let _ = model.feed(Event::submit(text)); }
                Step::Reset => { model.feed(Event::Reset).unwrap(); }
                Step::Resolve(outcome) => {
                    if !model.in_flight.is_empty() {
                        let generation = model.in_flight.remove(0);
                        let _ = model.feed(Event::CompletionResolved { generation, outcome });
                    }
                }
            }

            let live = model.in_flight.iter().filter(|g| **g == model.generation).count();
            prop_assert!(live <= 1, "{} live requests", live);
            prop_assert_eq!(live == 1, model.status == SessionStatus::Pending);
        }
    }

    // Turns alternate user/assistant, starting with user
    #[test]
    fn prop_transcript_alternates(steps in proptest::collection::vec(arb_step(), 0..40)) {
        let mut model = Model::default();

        for step in steps {
            match step {
                Step::Submit(text) => { let _ = model.feed(Event::submit(text)); }
                Step::Reset => { model.feed(Event::Reset).unwrap(); }
                Step::Resolve(outcome) => {
                    if !model.in_flight.is_empty() {
                        let generation = model.in_flight.remove(0);
                        let _ = model.feed(Event::CompletionResolved { generation, outcome });
                    }
                }
            }

            for (i, (role, _)) in model.transcript.iter().enumerate() {
                let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
                prop_assert_eq!(*role, expected);
            }
            prop_assert!(model
                .transcript
                .iter()
                .filter(|(role, _)| *role == Role::User)
                .all(|(_, content)| !content.is_empty() && content.trim() == content));
        }
    }

    // Submissions while pending never produce effects
    #[test]
    fn prop_pending_rejects_all_submissions(text in arb_text(), generation in 0u64..10) {
        let result = transition(&SessionStatus::Pending, generation, Event::submit(text));
        prop_assert!(result.is_err());
    }

    // Whitespace-only submissions never produce effects
    #[test]
    fn prop_blank_submissions_rejected(
        text in "[ \t\n\r]{0,10}",
        pending in any::<bool>(),
    ) {
        let status = if pending { SessionStatus::Pending } else { SessionStatus::Idle };
        let result = transition(&status, 0, Event::submit(text));
        prop_assert!(result.is_err());
    }

    // Reset always lands in idle with an empty transcript
    #[test]
    fn prop_reset_always_clears(steps in proptest::collection::vec(arb_step(), 0..20)) {
        let mut model = Model::default();
        for step in steps {
            match step {
                Step::Submit(text) => { let _ = model.feed(Event::submit(text)); }
                Step::Reset => { model.feed(Event::Reset).unwrap(); }
                Step::Resolve(outcome) => {
                    if !model.in_flight.is_empty() {
                        let generation = model.in_flight.remove(0);
                        let _ = model.feed(Event::CompletionResolved { generation, outcome });
                    }
                }
            }
        }

        model.feed(Event::Reset).unwrap();
        prop_assert!(model.transcript.is_empty());
        prop_assert_eq!(model.status, SessionStatus::Idle);
    }

    // A result dispatched before a reset is never applied after it
    #[test]
    fn prop_stale_results_discarded(
        first in "[a-z]{1,10}",
        outcome in arb_outcome(),
        resubmit in any::<bool>(),
    ) {
        let mut model = Model::default();
        model.feed(Event::submit(first)).unwrap();
        let stale_generation = model.in_flight[0];

        model.feed(Event::Reset).unwrap();
        if resubmit {
            model.feed(Event::submit("again")).unwrap();
        }
        let before = model.transcript.clone();

        let result = model.feed(Event::CompletionResolved { generation: stale_generation, outcome });
        prop_assert_eq!(result, Err(TransitionError::StaleResult { generation: stale_generation }));
        prop_assert_eq!(model.transcript, before);
    }
}
