//! Mock vote API for testing and local development.
//!
//! `MockVoteApi` keeps votables in memory and applies the backend's rules on
//! every vote: the toggle arithmetic, entry auto-verification and suggestion
//! quorum. Failures can be scheduled to exercise rollback paths.
//!
//! # Example
//!
//! ```ignore
//! use cashback_votes_api::{MockVoteApi, VoteApi};
//!
//! let api = MockVoteApi::new();
//! api.register(snapshot.clone());
//! let confirmation = api.cast_vote(snapshot.votable, VoteDirection::Up).await?;
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use cashback_votes_shared::types::{
    EntryStatus, SuggestionStatus, VotableId, VotableKind, VotableSnapshot, VotableStatus,
    VoteConfirmation, VoteDirection, VoteState,
};
use uuid::Uuid;

use crate::errors::{ApiError, MockFailure};
use crate::interfaces::VoteApi;

/// Upvotes an entry needs, with zero downvotes, to become verified.
pub const VERIFICATION_UPVOTES: u32 = 5;

/// Net score at which a pending suggestion is accepted.
pub const SUGGESTION_QUORUM: i64 = 5;

/// In-memory backend double.
pub struct MockVoteApi {
    votables: RwLock<HashMap<VotableId, VotableSnapshot>>,
    suggestions: RwLock<HashMap<Uuid, Vec<Uuid>>>,
    failure: Mutex<Option<MockFailure>>,
    calls: Mutex<Vec<(VotableId, VoteDirection)>>,
}

impl MockVoteApi {
    pub fn new() -> Self {
        Self {
            votables: RwLock::new(HashMap::new()),
            suggestions: RwLock::new(HashMap::new()),
            failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Registers a votable with its current server-side state.
    pub fn register(&self, snapshot: VotableSnapshot) {
        self.votables.write().unwrap().insert(snapshot.votable, snapshot);
    }

    /// Registers a suggestion and links it to its parent entry.
    pub fn register_suggestion(&self, entry_id: Uuid, snapshot: VotableSnapshot) {
        self.suggestions
            .write()
            .unwrap()
            .entry(entry_id)
            .or_default()
            .push(snapshot.votable.id);
        self.register(snapshot);
    }

    /// Makes the next `cast_vote` call fail with `failure`.
    pub fn fail_next(&self, failure: MockFailure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    /// Every `cast_vote` call that reached the mock, in order.
    pub fn calls(&self) -> Vec<(VotableId, VoteDirection)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Current server-side state of a votable.
    pub fn snapshot(&self, votable: &VotableId) -> Option<VotableSnapshot> {
        self.votables.read().unwrap().get(votable).cloned()
    }

    fn not_found(votable: &VotableId) -> ApiError {
        ApiError::NotFound(format!("{} not found in mock", votable))
    }
}

impl Default for MockVoteApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the backend's toggle rule to a stored vote.
fn server_vote(current: VoteState, direction: VoteDirection) -> VoteState {
    if current.direction() == Some(direction) {
        VoteState::None
    } else {
        VoteState::from(direction)
    }
}

fn tally(snapshot: &mut VotableSnapshot, next: VoteState) {
    let counts = &mut snapshot.counts;
    match snapshot.user_vote {
        VoteState::Up => counts.upvotes = counts.upvotes.saturating_sub(1),
        VoteState::Down => counts.downvotes = counts.downvotes.saturating_sub(1),
        VoteState::None => {}
    }
    match next {
        VoteState::Up => counts.upvotes += 1,
        VoteState::Down => counts.downvotes += 1,
        VoteState::None => {}
    }
    snapshot.user_vote = next;
}

fn entry_status(snapshot: &VotableSnapshot) -> Option<VotableStatus> {
    let counts = snapshot.counts;
    match snapshot.status {
        _ if counts.upvotes >= VERIFICATION_UPVOTES && counts.downvotes == 0 => {
            Some(VotableStatus::Entry(EntryStatus::Verified))
        }
        Some(VotableStatus::Entry(EntryStatus::Verified)) if counts.downvotes > 0 => {
            Some(VotableStatus::Entry(EntryStatus::Disputed))
        }
        status => status,
    }
}

#[async_trait]
impl VoteApi for MockVoteApi {
    async fn fetch_entry(&self, entry_id: Uuid) -> Result<VotableSnapshot, ApiError> {
        let votable = VotableId::entry(entry_id);
        self.snapshot(&votable).ok_or_else(|| Self::not_found(&votable))
    }

    async fn fetch_suggestions(&self, entry_id: Uuid) -> Result<Vec<VotableSnapshot>, ApiError> {
        let ids = self
            .suggestions
            .read()
            .unwrap()
            .get(&entry_id)
            .cloned()
            .unwrap_or_default();

        Ok(ids
            .into_iter()
            .filter_map(|id| self.snapshot(&VotableId::suggestion(id)))
            .filter(|s| s.status == Some(VotableStatus::Suggestion(SuggestionStatus::Pending)))
            .collect())
    }

    async fn cast_vote(
        &self,
        votable: VotableId,
        direction: VoteDirection,
    ) -> Result<VoteConfirmation, ApiError> {
        self.calls.lock().unwrap().push((votable, direction));

        if let Some(failure) = self.failure.lock().unwrap().take() {
            return Err(failure.into());
        }

        let mut votables = self.votables.write().unwrap();
        let snapshot = votables
            .get_mut(&votable)
            .ok_or_else(|| Self::not_found(&votable))?;

        let mut accepted = false;
        match votable.kind {
            VotableKind::Entry => {
                tally(snapshot, server_vote(snapshot.user_vote, direction));
                snapshot.status = entry_status(snapshot);
            }
            VotableKind::Suggestion => {
                if snapshot.status != Some(VotableStatus::Suggestion(SuggestionStatus::Pending)) {
                    return Err(ApiError::Status {
                        code: 400,
                        url: format!("mock://{}", votable),
                    });
                }
                let next = server_vote(snapshot.user_vote, direction);
                tally(snapshot, next);
                // A toggle-off never triggers acceptance.
                if !next.is_none() && snapshot.counts.score() >= SUGGESTION_QUORUM {
                    snapshot.status = Some(VotableStatus::Suggestion(SuggestionStatus::Accepted));
                    accepted = true;
                }
            }
        }

        let mut confirmation = VoteConfirmation::new(snapshot.counts, snapshot.user_vote);
        if let Some(status) = snapshot.status {
            confirmation = confirmation.with_status(status);
        }
        if accepted {
            confirmation = confirmation.accepted();
        }
        Ok(confirmation)
    }
}
