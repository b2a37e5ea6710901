//! Rule-set violations.

use thiserror::Error;

/// Problems found in an ordered rule set.
///
/// None of these stop a resolver from being built or used; they describe
/// rules that are dead weight under first-match-wins.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Rule #{index} can never fire: rule #{by} matches every pair it matches")]
    Shadowed { index: usize, by: usize },

    #[error("Rule set is empty: every input will be rejected")]
    Empty,
}
