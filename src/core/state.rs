//! State and Input traits for automaton values.
//!
//! States and inputs are opaque, equality-comparable values. The automaton
//! never inspects them beyond `PartialEq` and the diagnostic `name()`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for automaton states.
///
/// # Required Traits
///
/// - `Clone`: the current state is snapshotted for every transition record
/// - `PartialEq`: exact matchers compare by value
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: transition records can be persisted or shipped
///
/// # Example
///
/// ```rust
/// use reactive_automaton::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum AuthState {
///     LoggedOut,
///     LoggingIn,
///     LoggedIn,
/// }
///
/// impl State for AuthState {
///     fn name(&self) -> &str {
///         match self {
///             Self::LoggedOut => "LoggedOut",
///             Self::LoggingIn => "LoggingIn",
///             Self::LoggedIn => "LoggedIn",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for automaton inputs (events).
///
/// Inputs are owned by whoever originates them: an external caller or a
/// feedback producer. They are moved into the automaton's input channel.
pub trait Input:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Get the input's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Busy,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestInput {
        Start,
        Stop,
    }

    impl Input for TestInput {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
    }

    #[test]
    fn input_name_returns_correct_value() {
        assert_eq!(TestInput::Start.name(), "Start");
        assert_eq!(TestInput::Stop.name(), "Stop");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Busy;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Idle, TestState::Idle);
        assert_ne!(TestState::Idle, TestState::Busy);
    }
}
