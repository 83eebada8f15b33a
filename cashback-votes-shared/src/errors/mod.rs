//! Error types for the shared cashback votes types.
//! Defines the errors raised when external input cannot be turned into a typed value.
use thiserror::Error;

use crate::types::VotableKind;

/// Represents errors that can occur while parsing shared types from external input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedTypeError {
    /// The direction is not one of `up` or `down`. Removing a vote is not a direction.
    #[error("Invalid vote direction: {0}")]
    InvalidDirection(String),

    /// The status string is not known for the given votable kind.
    #[error("Invalid {kind} status: {value}")]
    InvalidStatus { kind: VotableKind, value: String },
}
