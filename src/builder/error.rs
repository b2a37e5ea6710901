//! Build errors for automaton and rule builders.

use thiserror::Error;

/// Errors that can occur when building automatons and rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .spawn()")]
    MissingInitialState,

    #[error("Rule target not specified. Call .to(state), .map(f), .emit(state, producer) or .effect(f)")]
    MissingTarget,
}
