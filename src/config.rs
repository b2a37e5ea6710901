//! # Automaton configuration.
//!
//! Provides [`AutomatonConfig`], the construction-time settings of an
//! automaton besides its initial state and resolver.
//!
//! The config is plain data and deserializable, so hosts can load it from
//! their own configuration files:
//!
//! ```rust
//! use reactive_automaton::{AutomatonConfig, Strategy};
//!
//! let cfg: AutomatonConfig = serde_json::from_str(r#"{ "strategy": "latest" }"#).unwrap();
//! assert_eq!(cfg.strategy, Strategy::Latest);
//! assert_eq!(cfg.reply_capacity, AutomatonConfig::default().reply_capacity);
//! ```

use crate::effects::Strategy;
use serde::{Deserialize, Serialize};

/// Default capacity of the outcome (reply) broadcast buffer.
pub const DEFAULT_REPLY_CAPACITY: usize = 1024;

/// Construction-time configuration of an automaton.
///
/// ## Field semantics
/// - `strategy`: feedback concurrency policy, fixed for the automaton's lifetime
/// - `reply_capacity`: outcome stream ring buffer size (min 1; clamped)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonConfig {
    /// How concurrent feedback producers interact.
    pub strategy: Strategy,

    /// Capacity of the outcome broadcast channel.
    ///
    /// Subscribers lagging more than `reply_capacity` records behind observe
    /// `Lagged` and skip the oldest records.
    pub reply_capacity: usize,
}

impl AutomatonConfig {
    /// Reply capacity clamped to the minimum of 1.
    pub fn reply_capacity(&self) -> usize {
        self.reply_capacity.max(1)
    }
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            reply_capacity: DEFAULT_REPLY_CAPACITY,
        }
    }
}

impl From<Strategy> for AutomatonConfig {
    fn from(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}
