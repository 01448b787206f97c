//! Session controller state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions: the
//! runtime feeds events in, applies the returned effects in order.

mod effect;
mod event;
mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
#[allow(unused_imports)]
pub use transition::{transition, TransitionError, TransitionResult, CONNECTION_ERROR_REPLY};
