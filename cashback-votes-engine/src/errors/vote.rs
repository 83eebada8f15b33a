//! Error types for casting a vote through the controller.
use cashback_votes_api::ApiError;
use cashback_votes_shared::types::VotableId;
use thiserror::Error;

/// Represents the ways a vote attempt can fail.
///
/// `Unauthenticated` and `VoteInFlight` are raised before any local state
/// changes. `NetworkFailure` is raised after the optimistic update has been
/// rolled back.
#[derive(Debug, Error)]
pub enum VoteError {
    #[error("Authentication required to vote")]
    Unauthenticated,

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] ApiError),

    #[error("Invalid vote direction: {0}")]
    InvalidDirection(String),

    #[error("A vote on this item is already being confirmed")]
    VoteInFlight,

    /// A `PendingVote` was handed to a controller that did not start it.
    #[error("Pending vote on {pending} cannot be resolved by the controller of {votable}")]
    ForeignPendingVote { votable: VotableId, pending: VotableId },
}
