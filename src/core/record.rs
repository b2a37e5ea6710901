//! Per-input transition outcome.

use super::state::{Input, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of consuming a single input.
///
/// Exactly one record is produced per consumed input, accepted or rejected.
/// `to` is `Some` iff a rule matched and fired; `None` means the input was
/// rejected and the state did not change.
///
/// # Example
///
/// ```rust
/// use reactive_automaton::core::TransitionRecord;
/// use reactive_automaton::{input_enum, state_enum};
///
/// state_enum! {
///     enum Door { Open, Closed }
/// }
///
/// input_enum! {
///     enum Push { Close, Knock }
/// }
///
/// let accepted = TransitionRecord::accepted(Push::Close, Door::Open, Door::Closed);
/// assert!(accepted.is_accepted());
///
/// let rejected = TransitionRecord::rejected(Push::Knock, Door::Closed);
/// assert!(rejected.is_rejected());
/// assert_eq!(rejected.to, None);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, I: Input> {
    /// The consumed input
    pub input: I,
    /// State before the input was resolved
    pub from: S,
    /// State after the transition, absent on rejection
    pub to: Option<S>,
    /// When the input was resolved
    pub timestamp: DateTime<Utc>,
}

/// Shorthand used by observers of the outcome stream.
pub type Reply<S, I> = TransitionRecord<S, I>;

impl<S: State, I: Input> TransitionRecord<S, I> {
    pub fn accepted(input: I, from: S, to: S) -> Self {
        Self {
            input,
            from,
            to: Some(to),
            timestamp: Utc::now(),
        }
    }

    pub fn rejected(input: I, from: S) -> Self {
        Self {
            input,
            from,
            to: None,
            timestamp: Utc::now(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.to.is_some()
    }

    pub fn is_rejected(&self) -> bool {
        self.to.is_none()
    }
}

/// Records compare by outcome; the timestamp is informational.
impl<S: State, I: Input> PartialEq for TransitionRecord<S, I> {
    fn eq(&self, other: &Self) -> bool {
        self.input == other.input && self.from == other.from && self.to == other.to
    }
}
