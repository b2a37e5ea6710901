//! Asynchronous shell around the pure core.
//!
//! This module runs the automaton: it serializes inputs, applies resolver
//! results and schedules feedback producers.
//!
//! # Key Concepts
//!
//! - **Automaton**: single-writer processing loop owning the current state
//! - **Producer**: lazily started source of feedback inputs
//! - **FeedbackController**: runs, queues or cancels producers per [`Strategy`]

mod automaton;
mod feedback;
mod producer;
mod strategy;

pub use automaton::Automaton;
pub use feedback::{Feedback, FeedbackController, ProducerId};
pub use producer::Producer;
pub use strategy::{ParseStrategyError, Strategy};
