//! Reactive Automaton: a reactive finite state machine engine
//!
//! An automaton consumes a live stream of inputs, resolves each one against
//! declarative `(state, input) → state` rules, and publishes a record of every
//! attempt, accepted or rejected. Rules may also start a feedback
//! [`Producer`]: asynchronous work whose outputs are fed back into the same
//! automaton as further inputs.
//!
//! # Core Concepts
//!
//! - **Rule**: a state matcher, an input matcher and a transform
//! - **Resolver**: ordered rules folded into one lookup; first match wins
//! - **Automaton**: serializes inputs, owns the state, publishes records
//! - **Strategy**: how concurrent producers interact (`Merge`, `Concat`, `Latest`, `Race`)
//!
//! ```text
//!  inputs ──► Automaton ──► Resolver ──► state update ──► replies / state stream
//!                ▲                           │
//!                │                           └─► FeedbackController ─► Producer tasks
//!                └──────────────── feedback channel ◄──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use reactive_automaton::core::{exact, Resolver, Rule};
//! use reactive_automaton::effects::{Automaton, Producer, Strategy};
//! use reactive_automaton::input::pipe;
//! use reactive_automaton::{input_enum, state_enum};
//! use std::time::Duration;
//!
//! state_enum! {
//!     enum Auth { LoggedOut, LoggingIn, LoggedIn }
//! }
//!
//! input_enum! {
//!     enum AuthInput { Login, LoginOk }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let resolver = Resolver::build(vec![
//!     Rule::effect(exact(Auth::LoggedOut), exact(AuthInput::Login), |_, _| {
//!         (Auth::LoggingIn, Producer::delayed(AuthInput::LoginOk, Duration::from_millis(10)))
//!     }),
//!     Rule::to(exact(Auth::LoggingIn), exact(AuthInput::LoginOk), Auth::LoggedIn),
//! ]);
//!
//! let (tx, rx) = pipe();
//! let automaton = Automaton::new(Auth::LoggedOut, rx, resolver, Strategy::Latest);
//! let mut replies = automaton.replies();
//!
//! tx.send(AuthInput::Login).unwrap();
//! assert_eq!(replies.recv().await.unwrap().to, Some(Auth::LoggingIn));
//!
//! // the producer feeds `LoginOk` back in
//! let reply = replies.recv().await.unwrap();
//! assert_eq!(reply.input, AuthInput::LoginOk);
//! assert_eq!(automaton.state(), Auth::LoggedIn);
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod error;
pub mod input;
pub mod validation;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError, RuleBuilder};
pub use config::AutomatonConfig;
pub use core::{
    any, exact, when, Input, Matcher, Reply, Resolution, Resolver, Rule, State, TransitionRecord,
};
pub use effects::{Automaton, Producer, Strategy};
pub use error::AutomatonError;
pub use input::{pipe, InputSender};
