//! Transition rules: a matcher pair plus a transform.

use super::matcher::Matcher;
use super::state::{Input, State};
use crate::effects::Producer;
use std::fmt;
use std::sync::Arc;

/// Transform producing a bare next state.
pub type PlainTransform<S, I> = Arc<dyn Fn(&S, &I) -> S + Send + Sync>;

/// Transform producing a next state and a feedback producer.
///
/// Called once per firing, so every firing gets a fresh producer.
pub type EffectTransform<S, I> = Arc<dyn Fn(&S, &I) -> (S, Producer<I>) + Send + Sync>;

/// What a rule does once it matches.
pub enum Transform<S, I> {
    Plain(PlainTransform<S, I>),
    Effectful(EffectTransform<S, I>),
}

impl<S, I> Clone for Transform<S, I> {
    fn clone(&self) -> Self {
        match self {
            Self::Plain(f) => Self::Plain(Arc::clone(f)),
            Self::Effectful(f) => Self::Effectful(Arc::clone(f)),
        }
    }
}

impl<S, I> fmt::Debug for Transform<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(_) => f.write_str("Plain"),
            Self::Effectful(_) => f.write_str("Effectful"),
        }
    }
}

/// Result of a matched rule.
#[derive(Debug)]
pub struct Resolution<S, I> {
    /// State to move to
    pub next: S,
    /// Feedback work, present only for effectful rules
    pub producer: Option<Producer<I>>,
}

/// A single transition rule.
///
/// # Example
///
/// ```rust
/// use reactive_automaton::core::{any, exact, Rule};
/// use reactive_automaton::{input_enum, state_enum};
///
/// state_enum! {
///     enum Light { Red, Green }
/// }
///
/// input_enum! {
///     enum Tick { Next, Reset }
/// }
///
/// let rule = Rule::to(exact(Light::Red), exact(Tick::Next), Light::Green);
/// assert!(rule.matches(&Light::Red, &Tick::Next));
/// assert!(!rule.matches(&Light::Green, &Tick::Next));
///
/// let reset = Rule::to(any(), exact(Tick::Reset), Light::Red);
/// assert!(reset.matches(&Light::Green, &Tick::Reset));
/// ```
pub struct Rule<S, I> {
    pub state: Matcher<S>,
    pub input: Matcher<I>,
    pub transform: Transform<S, I>,
}

impl<S: State, I: Input> Rule<S, I> {
    pub fn new(state: Matcher<S>, input: Matcher<I>, transform: Transform<S, I>) -> Self {
        Self {
            state,
            input,
            transform,
        }
    }

    /// Rule that always moves to `next`.
    pub fn to(state: Matcher<S>, input: Matcher<I>, next: S) -> Self {
        Self::map(state, input, move |_, _| next.clone())
    }

    /// Rule computing the next state from the matched pair.
    pub fn map<F>(state: Matcher<S>, input: Matcher<I>, f: F) -> Self
    where
        F: Fn(&S, &I) -> S + Send + Sync + 'static,
    {
        Self::new(state, input, Transform::Plain(Arc::new(f)))
    }

    /// Rule computing the next state and a feedback producer.
    pub fn effect<F>(state: Matcher<S>, input: Matcher<I>, f: F) -> Self
    where
        F: Fn(&S, &I) -> (S, Producer<I>) + Send + Sync + 'static,
    {
        Self::new(state, input, Transform::Effectful(Arc::new(f)))
    }

    /// Check if this rule accepts the pair (pure).
    pub fn matches(&self, state: &S, input: &I) -> bool {
        self.state.matches(state) && self.input.matches(input)
    }

    /// Apply the transform. Callers check [`Rule::matches`] first.
    pub fn apply(&self, state: &S, input: &I) -> Resolution<S, I> {
        match &self.transform {
            Transform::Plain(f) => Resolution {
                next: f(state, input),
                producer: None,
            },
            Transform::Effectful(f) => {
                let (next, producer) = f(state, input);
                Resolution {
                    next,
                    producer: Some(producer),
                }
            }
        }
    }

    pub fn is_effectful(&self) -> bool {
        matches!(self.transform, Transform::Effectful(_))
    }

    /// True when an earlier `self` would always win over `later`.
    pub fn shadows(&self, later: &Rule<S, I>) -> bool {
        self.state.covers(&later.state) && self.input.covers(&later.input)
    }
}

impl<S: Clone, I: Clone> Clone for Rule<S, I> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            input: self.input.clone(),
            transform: self.transform.clone(),
        }
    }
}

impl<S: fmt::Debug, I: fmt::Debug> fmt::Debug for Rule<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("state", &self.state)
            .field("input", &self.input)
            .field("transform", &self.transform)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{any, exact, when};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Middle,
        End,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Middle => "Middle",
                Self::End => "End",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestInput {
        Step(u8),
        Finish,
    }

    impl Input for TestInput {
        fn name(&self) -> &str {
            match self {
                Self::Step(_) => "Step",
                Self::Finish => "Finish",
            }
        }
    }

    #[test]
    fn rule_requires_both_matchers() {
        let rule = Rule::to(
            exact(TestState::Start),
            exact(TestInput::Finish),
            TestState::End,
        );

        assert!(rule.matches(&TestState::Start, &TestInput::Finish));
        assert!(!rule.matches(&TestState::Middle, &TestInput::Finish));
        assert!(!rule.matches(&TestState::Start, &TestInput::Step(1)));
    }

    #[test]
    fn plain_rule_has_no_producer() {
        let rule: Rule<TestState, TestInput> = Rule::to(any(), any(), TestState::Middle);
        let resolution = rule.apply(&TestState::Start, &TestInput::Finish);

        assert_eq!(resolution.next, TestState::Middle);
        assert!(resolution.producer.is_none());
        assert!(!rule.is_effectful());
    }

    #[test]
    fn map_rule_sees_input() {
        let is_step = when(|i: &TestInput| matches!(i, TestInput::Step(_)));
        let rule = Rule::map(any(), is_step, |_: &TestState, i: &TestInput| match i {
            TestInput::Step(n) if *n > 5 => TestState::End,
            _ => TestState::Middle,
        });

        assert_eq!(
            rule.apply(&TestState::Start, &TestInput::Step(9)).next,
            TestState::End
        );
        assert_eq!(
            rule.apply(&TestState::Start, &TestInput::Step(1)).next,
            TestState::Middle
        );
    }

    #[test]
    fn effectful_rule_returns_producer() {
        let rule = Rule::effect(
            exact(TestState::Start),
            any(),
            |_: &TestState, _: &TestInput| (TestState::Middle, Producer::value(TestInput::Finish)),
        );
        let resolution = rule.apply(&TestState::Start, &TestInput::Step(0));

        assert_eq!(resolution.next, TestState::Middle);
        assert!(resolution.producer.is_some());
        assert!(rule.is_effectful());
    }

    #[test]
    fn wildcard_rule_shadows_exact_rule() {
        let broad = Rule::to(any(), exact(TestInput::Finish), TestState::End);
        let narrow = Rule::to(
            exact(TestState::Start),
            exact(TestInput::Finish),
            TestState::Middle,
        );

        assert!(broad.shadows(&narrow));
        assert!(!narrow.shadows(&broad));
    }
}
