//! Core transition-resolution types.
//!
//! This module contains the pure part of the automaton:
//! - State and Input traits
//! - Matchers and rules
//! - The resolver that folds rules into one lookup
//! - Transition records
//!
//! Nothing here spawns, blocks or mutates shared state.

mod matcher;
mod record;
mod resolver;
mod rule;
mod state;

pub use matcher::{any, exact, when, Matcher, Predicate};
pub use record::{Reply, TransitionRecord};
pub use resolver::Resolver;
pub use rule::{EffectTransform, PlainTransform, Resolution, Rule, Transform};
pub use state::{Input, State};
