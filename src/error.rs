//! Errors raised around the automaton runtime.
//!
//! Resolution itself never fails: a rejected input is reported as a
//! [`TransitionRecord`](crate::core::TransitionRecord) with no target state.
//! The errors here only concern the plumbing around the processing loop.

use thiserror::Error;

/// Errors produced by the automaton runtime.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AutomatonError {
    /// The automaton no longer accepts inputs (stopped or dropped).
    #[error("input channel closed; the automaton is no longer consuming inputs")]
    InputClosed,

    /// The processing task panicked or was aborted.
    #[error("automaton task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AutomatonError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            AutomatonError::InputClosed => "automaton_input_closed",
            AutomatonError::Task(_) => "automaton_task_failed",
        }
    }
}
