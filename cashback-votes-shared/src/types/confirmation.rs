use crate::types::{VotableStatus, VoteState, VotesCount};

/// Authoritative result of a vote as reported by the backend.
///
/// Built from a validated response payload; every field has already been
/// checked, so callers can overwrite local state with it as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteConfirmation {
    pub counts: VotesCount,
    pub user_vote: VoteState,
    pub status: Option<VotableStatus>,
    /// Set when a rate suggestion reached quorum and was applied to its entry.
    pub accepted: bool,
}

impl VoteConfirmation {
    pub fn new(counts: VotesCount, user_vote: VoteState) -> Self {
        Self {
            counts,
            user_vote,
            status: None,
            accepted: false,
        }
    }

    pub fn with_status(mut self, status: VotableStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn accepted(mut self) -> Self {
        self.accepted = true;
        self
    }
}
