use crate::types::{VotableId, VotableStatus, VoteState, VotesCount};

/// Server snapshot of a votable as seen by the acting user.
///
/// A snapshot initialises the local vote state when a votable is loaded,
/// and replaces it when the parent view reloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotableSnapshot {
    pub votable: VotableId,
    pub counts: VotesCount,
    pub user_vote: VoteState,
    pub status: Option<VotableStatus>,
}

impl VotableSnapshot {
    pub fn new(votable: VotableId, counts: VotesCount, user_vote: VoteState) -> Self {
        Self {
            votable,
            counts,
            user_vote,
            status: None,
        }
    }

    pub fn with_status(mut self, status: VotableStatus) -> Self {
        self.status = Some(status);
        self
    }
}
