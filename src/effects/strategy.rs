//! # Feedback concurrency strategy
//!
//! Accepted effectful transitions hand a [`Producer`](super::Producer) to the
//! feedback controller. When other producers are still in flight, the
//! strategy decides what happens.
//!
//! ## Variants
//! - `Merge`: run every producer concurrently; nobody cancels anybody.
//! - `Concat`: run producers one at a time, in firing order (FIFO).
//! - `Latest`: an accepted effectful transition cancels whatever is running.
//! - `Race`: the first in-flight producer to emit wins; the rest are cancelled.
//!
//! ## Invariants
//! - Rejected inputs and plain transitions never cancel a producer.
//! - The strategy is fixed for the automaton's lifetime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Policy governing how concurrent producers are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Run all producers concurrently.
    ///
    /// Values from different producers interleave in emission order.
    #[default]
    Merge,

    /// Queue producers and run them strictly one after another.
    ///
    /// The next producer starts only after the running one completes.
    Concat,

    /// Cancel the running producer when a new one arrives.
    ///
    /// Use when a newer request makes older in-flight work irrelevant.
    Latest,

    /// First producer to emit wins; all others are cancelled.
    Race,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Merge => "merge",
            Strategy::Concat => "concat",
            Strategy::Latest => "latest",
            Strategy::Race => "race",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown strategy '{0}', expected one of: merge, concat, latest, race")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merge" => Ok(Strategy::Merge),
            "concat" => Ok(Strategy::Concat),
            "latest" => Ok(Strategy::Latest),
            "race" => Ok(Strategy::Race),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_merge() {
        assert_eq!(Strategy::default(), Strategy::Merge);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Latest".parse::<Strategy>().unwrap(), Strategy::Latest);
        assert_eq!(" race ".parse::<Strategy>().unwrap(), Strategy::Race);
        assert!("switch".parse::<Strategy>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for strategy in [
            Strategy::Merge,
            Strategy::Concat,
            Strategy::Latest,
            Strategy::Race,
        ] {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Strategy::Concat).unwrap(), "\"concat\"");
        let parsed: Strategy = serde_json::from_str("\"race\"").unwrap();
        assert_eq!(parsed, Strategy::Race);
    }
}
