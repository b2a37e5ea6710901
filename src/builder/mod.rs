//! Builder API for ergonomic automaton construction.
//!
//! This module provides fluent builders and macros for creating rules and
//! automatons with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod machine;
pub mod macros;
pub mod rule;

pub use error::BuildError;
pub use machine::AutomatonBuilder;
pub use rule::RuleBuilder;

use crate::core::{exact, Input, Rule, State};
use crate::effects::Producer;

/// Create an exact-match rule that moves to a fixed state.
///
/// # Example
///
/// ```
/// use reactive_automaton::builder::simple_rule;
/// use reactive_automaton::{input_enum, state_enum};
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// input_enum! {
///     enum MyInput {
///         Go,
///     }
/// }
///
/// let rule = simple_rule(MyState::Start, MyInput::Go, MyState::End);
/// assert!(rule.matches(&MyState::Start, &MyInput::Go));
/// ```
pub fn simple_rule<S: State, I: Input>(from: S, on: I, to: S) -> Rule<S, I> {
    Rule::to(exact(from), exact(on), to)
}

/// Create an exact-match rule that moves to a fixed state and starts a
/// fresh producer from `factory` every time it fires.
///
/// # Example
///
/// ```
/// use reactive_automaton::builder::effect_rule;
/// use reactive_automaton::effects::Producer;
/// use reactive_automaton::{input_enum, state_enum};
/// use std::time::Duration;
///
/// state_enum! {
///     enum Auth { LoggedOut, LoggingIn, LoggedIn }
/// }
///
/// input_enum! {
///     enum AuthInput { Login, LoginOk }
/// }
///
/// let rule = effect_rule(Auth::LoggedOut, AuthInput::Login, Auth::LoggingIn, || {
///     Producer::delayed(AuthInput::LoginOk, Duration::from_secs(1))
/// });
/// assert!(rule.is_effectful());
/// ```
pub fn effect_rule<S, I, F>(from: S, on: I, to: S, factory: F) -> Rule<S, I>
where
    S: State,
    I: Input,
    F: Fn() -> Producer<I> + Send + Sync + 'static,
{
    Rule::effect(exact(from), exact(on), move |_, _| (to.clone(), factory()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Middle,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Middle => "Middle",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestInput {
        Go,
        Done,
    }

    impl Input for TestInput {
        fn name(&self) -> &str {
            match self {
                Self::Go => "Go",
                Self::Done => "Done",
            }
        }
    }

    #[test]
    fn simple_rule_builds() {
        let rule = simple_rule(TestState::Start, TestInput::Go, TestState::Middle);

        assert!(rule.matches(&TestState::Start, &TestInput::Go));
        assert!(!rule.matches(&TestState::Middle, &TestInput::Go));
        assert!(!rule.is_effectful());
    }

    #[test]
    fn effect_rule_creates_fresh_producer_per_firing() {
        let rule = effect_rule(TestState::Start, TestInput::Go, TestState::Middle, || {
            Producer::value(TestInput::Done)
        });

        let first = rule.apply(&TestState::Start, &TestInput::Go);
        let second = rule.apply(&TestState::Start, &TestInput::Go);

        assert_eq!(first.next, TestState::Middle);
        assert!(first.producer.is_some());
        assert!(second.producer.is_some());
    }
}
