//! Validation-based diagnostics for rule sets.
//!
//! Uses Stillwater's `Validation` type to report every problem in a rule
//! set in a single pass instead of stopping at the first one.
//!
//! Diagnostics never block construction: a resolver with shadowed rules, or
//! no rules at all, is still a valid resolver. Checking is opt-in through
//! [`Resolver::check`](crate::core::Resolver::check).
//!
//! # Example
//!
//! ```rust
//! use reactive_automaton::core::{any, exact, Resolver, Rule};
//! use reactive_automaton::validation::RuleViolation;
//! use reactive_automaton::{input_enum, state_enum};
//! use stillwater::validation::Validation;
//!
//! state_enum! {
//!     enum Phase { A, B }
//! }
//!
//! input_enum! {
//!     enum Go { Next }
//! }
//!
//! let resolver = Resolver::build(vec![
//!     Rule::to(any(), exact(Go::Next), Phase::A),
//!     Rule::to(exact(Phase::A), exact(Go::Next), Phase::B),
//! ]);
//!
//! match resolver.check() {
//!     Validation::Failure(errors) => {
//!         assert!(errors.iter().any(|e| *e == RuleViolation::Shadowed { index: 1, by: 0 }));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_rules, RuleCheck};
pub use violations::RuleViolation;
