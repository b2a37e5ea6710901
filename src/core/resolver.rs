//! Ordered rule set compiled into a single lookup.

use super::rule::{Resolution, Rule};
use super::state::{Input, State};
use crate::validation::{check_rules, RuleCheck};
use std::fmt;
use std::sync::Arc;

/// Ordered, immutable collection of rules. First match wins.
///
/// Rule order is preserved exactly as authored. When several rules could
/// match the same pair, only the earliest is ever considered, so earlier
/// rules act as overrides for later ones.
///
/// Cloning is cheap: the rule list is shared.
///
/// # Example
///
/// ```rust
/// use reactive_automaton::core::{any, exact, Resolver, Rule};
/// use reactive_automaton::{input_enum, state_enum};
///
/// state_enum! {
///     enum S { S0, S1, S2 }
/// }
///
/// input_enum! {
///     enum I { I0, I1, I2 }
/// }
///
/// let resolver = Resolver::build(vec![
///     Rule::to(any(), exact(I::I0), S::S1),
///     Rule::to(exact(S::S1), any(), S::S2),
/// ]);
///
/// assert!(resolver.resolve(&S::S0, &I::I2).is_none());
/// assert_eq!(resolver.resolve(&S::S0, &I::I0).unwrap().next, S::S1);
/// assert_eq!(resolver.resolve(&S::S1, &I::I2).unwrap().next, S::S2);
/// ```
pub struct Resolver<S, I> {
    rules: Arc<[Rule<S, I>]>,
}

impl<S: State, I: Input> Resolver<S, I> {
    /// Fold an ordered rule list into a resolver.
    ///
    /// Never fails; an empty list yields a resolver that rejects everything.
    pub fn build(rules: impl IntoIterator<Item = Rule<S, I>>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Resolver that rejects every input.
    pub fn empty() -> Self {
        Self::build(Vec::new())
    }

    /// Look up the transition for `(state, input)` (pure).
    ///
    /// `None` means the input is rejected in this state; it is a normal
    /// outcome, not an error.
    pub fn resolve(&self, state: &S, input: &I) -> Option<Resolution<S, I>> {
        self.find(state, input).map(|rule| rule.apply(state, input))
    }

    /// Index of the rule that would fire for `(state, input)`.
    pub fn position(&self, state: &S, input: &I) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(state, input))
    }

    fn find(&self, state: &S, input: &I) -> Option<&Rule<S, I>> {
        self.rules.iter().find(|rule| rule.matches(state, input))
    }

    /// Append `other`'s rules after this resolver's rules.
    ///
    /// Rules of `self` take precedence over rules of `other`.
    pub fn chain(&self, other: &Resolver<S, I>) -> Self {
        Self::build(self.rules.iter().chain(other.rules.iter()).cloned())
    }

    /// Report rules that can never fire.
    pub fn check(&self) -> RuleCheck {
        check_rules(&self.rules)
    }

    pub fn rules(&self) -> &[Rule<S, I>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S, I> Clone for Resolver<S, I> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<S: fmt::Debug, I: fmt::Debug> fmt::Debug for Resolver<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("rules", &self.rules)
            .finish()
    }
}

impl<S: State, I: Input> FromIterator<Rule<S, I>> for Resolver<S, I> {
    fn from_iter<T: IntoIterator<Item = Rule<S, I>>>(iter: T) -> Self {
        Self::build(iter)
    }
}
