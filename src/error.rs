//! Error types for the Hanoi core, machine and configuration.

use crate::config::ConfigViolation;
use crate::core::{InvariantViolation, Move};
use thiserror::Error;

/// Errors that can occur while building or driving a Hanoi puzzle.
///
/// Boundary conditions (stepping past either end, seeking out of range)
/// are not errors; they are absorbed by the machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HanoiError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: String },

    #[error("Pile invariants violated: {0:?}")]
    InvariantViolated(Vec<InvariantViolation>),

    #[error("Invalid configuration: {0:?}")]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("Configuration could not be parsed: {0}")]
    ConfigParse(String),
}

impl HanoiError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
