//! Configuration violations.

use crate::core::Peg;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single problem found while validating a [`HanoiConfig`](super::HanoiConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigViolation {
    #[error("Minimum disk count must be at least 1")]
    ZeroMinimum,

    #[error("Minimum disk count ({min}) exceeds maximum ({max})")]
    InvertedBounds { min: usize, max: usize },

    #[error("Maximum disk count ({max}) exceeds supported limit ({limit})")]
    MaximumTooLarge { max: usize, limit: usize },

    #[error("Initial disk count ({initial}) is outside {min}..={max}")]
    InitialOutOfRange {
        initial: usize,
        min: usize,
        max: usize,
    },

    #[error("Pegs must be distinct (source {source_peg}, target {target}, auxiliary {auxiliary})")]
    PegsNotDistinct {
        source_peg: Peg,
        target: Peg,
        auxiliary: Peg,
    },
}
