//! This module defines the `VoteApi` trait, the seam between the vote controller
//! and the cashback directory backend.
use async_trait::async_trait;
use cashback_votes_shared::types::{VotableId, VotableSnapshot, VoteConfirmation, VoteDirection};
use uuid::Uuid;

use crate::errors::ApiError;

/// Abstracts the backend endpoints involved in voting.
///
/// Production code uses [`crate::HttpVoteApi`]; tests use
/// [`crate::MockVoteApi`]. Implementations never retry: a single request
/// either yields an authoritative answer or an `ApiError`.
#[async_trait]
pub trait VoteApi: Send + Sync {
    /// Fetches the server snapshot of a cashback entry.
    ///
    /// # Arguments
    ///
    /// * `entry_id` - The entry to load
    ///
    /// # Returns
    ///
    /// * `Ok(VotableSnapshot)` - Counts, the acting user's vote and the entry status
    /// * `Err(ApiError)` - If the request fails or the payload is malformed
    async fn fetch_entry(&self, entry_id: Uuid) -> Result<VotableSnapshot, ApiError>;

    /// Fetches snapshots of the pending rate suggestions of an entry.
    async fn fetch_suggestions(&self, entry_id: Uuid) -> Result<Vec<VotableSnapshot>, ApiError>;

    /// Casts a vote in `direction` on `votable`.
    ///
    /// The backend applies the same toggle rules as the local transition
    /// engine; the returned confirmation is authoritative.
    async fn cast_vote(
        &self,
        votable: VotableId,
        direction: VoteDirection,
    ) -> Result<VoteConfirmation, ApiError>;
}
