//! Builder for constructing rules.

use crate::builder::error::BuildError;
use crate::core::{any, exact, when, Input, Matcher, Rule, State, Transform};
use crate::effects::Producer;
use std::sync::Arc;

/// Builder for constructing rules with a fluent API.
///
/// Both matchers default to `any()`; only the target is required.
pub struct RuleBuilder<S, I> {
    state: Matcher<S>,
    input: Matcher<I>,
    transform: Option<Transform<S, I>>,
}

impl<S: State, I: Input> RuleBuilder<S, I> {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self {
            state: any(),
            input: any(),
            transform: None,
        }
    }

    /// Match exactly this source state.
    pub fn from(mut self, state: S) -> Self {
        self.state = exact(state);
        self
    }

    /// Match exactly this input.
    pub fn on(mut self, input: I) -> Self {
        self.input = exact(input);
        self
    }

    /// Use an arbitrary state matcher.
    pub fn state(mut self, matcher: Matcher<S>) -> Self {
        self.state = matcher;
        self
    }

    /// Use an arbitrary input matcher.
    pub fn input(mut self, matcher: Matcher<I>) -> Self {
        self.input = matcher;
        self
    }

    /// Match source states with a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.state = when(predicate);
        self
    }

    /// Move to a fixed state.
    pub fn to(self, next: S) -> Self {
        self.map(move |_, _| next.clone())
    }

    /// Compute the next state.
    pub fn map<F>(mut self, f: F) -> Self
    where
        F: Fn(&S, &I) -> S + Send + Sync + 'static,
    {
        self.transform = Some(Transform::Plain(Arc::new(f)));
        self
    }

    /// Move to a fixed state and start a fresh producer from `factory`.
    pub fn emit<F>(self, next: S, factory: F) -> Self
    where
        F: Fn() -> Producer<I> + Send + Sync + 'static,
    {
        self.effect(move |_, _| (next.clone(), factory()))
    }

    /// Compute the next state and a producer.
    pub fn effect<F>(mut self, f: F) -> Self
    where
        F: Fn(&S, &I) -> (S, Producer<I>) + Send + Sync + 'static,
    {
        self.transform = Some(Transform::Effectful(Arc::new(f)));
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<Rule<S, I>, BuildError> {
        let transform = self.transform.ok_or(BuildError::MissingTarget)?;
        Ok(Rule::new(self.state, self.input, transform))
    }
}

impl<S: State, I: Input> Default for RuleBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}
