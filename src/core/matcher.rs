//! Matchers: pure predicates over states or inputs.
//!
//! A rule fires only when its state matcher and its input matcher both
//! accept the current pair. Matchers are immutable once constructed.

use std::fmt;
use std::sync::Arc;

/// Boxed predicate used by [`Matcher::When`].
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Predicate over a state or an input value.
///
/// # Example
///
/// ```rust
/// use reactive_automaton::core::{any, exact, when, Matcher};
///
/// let only_three: Matcher<u32> = exact(3);
/// let anything: Matcher<u32> = any();
/// let even: Matcher<u32> = when(|n: &u32| n % 2 == 0);
///
/// assert!(only_three.matches(&3));
/// assert!(!only_three.matches(&4));
/// assert!(anything.matches(&4));
/// assert!(even.matches(&4));
/// ```
pub enum Matcher<T> {
    /// Matches by value equality.
    Exact(T),

    /// Wildcard: matches every value.
    Any,

    /// Matches when the predicate returns `true`.
    ///
    /// The predicate must be pure (deterministic, no side effects).
    When(Predicate<T>),
}

/// Matcher accepting only `value`.
pub fn exact<T>(value: T) -> Matcher<T> {
    Matcher::Exact(value)
}

/// Wildcard matcher.
pub fn any<T>() -> Matcher<T> {
    Matcher::Any
}

/// Matcher backed by a pure predicate.
pub fn when<T, F>(predicate: F) -> Matcher<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Matcher::When(Arc::new(predicate))
}

impl<T: PartialEq> Matcher<T> {
    /// Check whether `value` is accepted.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Exact(expected) => expected == value,
            Self::Any => true,
            Self::When(predicate) => predicate(value),
        }
    }

    /// Conservative subsumption: `true` only when every value accepted by
    /// `other` is provably accepted by `self`.
    ///
    /// Predicates are opaque, so a `When` matcher never covers anything and
    /// is only covered by `Any`.
    pub fn covers(&self, other: &Matcher<T>) -> bool {
        match (self, other) {
            (Self::Any, _) => true,
            (Self::Exact(a), Self::Exact(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl<T: Clone> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Exact(value) => Self::Exact(value.clone()),
            Self::Any => Self::Any,
            Self::When(predicate) => Self::When(Arc::clone(predicate)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            Self::Any => f.write_str("Any"),
            Self::When(_) => f.write_str("When(<predicate>)"),
        }
    }
}

impl<T> From<T> for Matcher<T> {
    fn from(value: T) -> Self {
        Matcher::Exact(value)
    }
}
