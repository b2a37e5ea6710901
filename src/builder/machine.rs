//! Builder for constructing automatons.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::config::AutomatonConfig;
use crate::core::{Input, Resolver, Rule, State};
use crate::effects::{Automaton, Strategy};
use crate::input::{pipe, InputSender};
use futures::Stream;

/// Builder for constructing automatons with a fluent API.
///
/// Rules are kept in the order they are added; resolvers added with
/// [`resolver`](Self::resolver) are appended rule by rule.
pub struct AutomatonBuilder<S: State, I: Input> {
    initial: Option<S>,
    rules: Vec<Rule<S, I>>,
    config: AutomatonConfig,
}

impl<S: State, I: Input> AutomatonBuilder<S, I> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            rules: Vec::new(),
            config: AutomatonConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn rule(mut self, builder: RuleBuilder<S, I>) -> Result<Self, BuildError> {
        self.rules.push(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: Rule<S, I>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule<S, I>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Append every rule of an existing resolver.
    pub fn resolver(self, resolver: &Resolver<S, I>) -> Self {
        self.rules(resolver.rules().iter().cloned())
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn reply_capacity(mut self, capacity: usize) -> Self {
        self.config.reply_capacity = capacity;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: AutomatonConfig) -> Self {
        self.config = config;
        self
    }

    /// Start the automaton on `inputs`.
    pub fn spawn<St>(self, inputs: St) -> Result<Automaton<S, I>, BuildError>
    where
        St: Stream<Item = I> + Send + 'static,
    {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let resolver = Resolver::build(self.rules);

        Ok(Automaton::with_config(initial, inputs, resolver, self.config))
    }

    /// Start the automaton on a fresh [`pipe`], returning its sender.
    pub fn spawn_with_pipe(self) -> Result<(Automaton<S, I>, InputSender<I>), BuildError> {
        let (tx, rx) = pipe();
        let automaton = self.spawn(rx)?;
        Ok((automaton, tx))
    }
}

impl<S: State, I: Input> Default for AutomatonBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}
