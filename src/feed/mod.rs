//! # Feed Aggregation
//!
//! Loads the two home-screen feeds from the recipe API and publishes them to
//! their stores.
//!
//! - [`normalize`]: the sentinel-drop rule applied to every list response
//! - [`aggregator`]: the two loads, the liveness check, and `activate()`

pub mod aggregator;
pub mod normalize;

use std::fmt;

pub use aggregator::{ActivationReport, FeedAggregator, FeedConfig, LoadOutcome};

/// Which of the two home-screen lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Popular,
    Newest,
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::Popular => write!(f, "popular"),
            FeedKind::Newest => write!(f, "newest"),
        }
    }
}
