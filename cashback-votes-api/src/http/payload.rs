//! Wire schema of the backend's vote-related responses.
//!
//! Payloads are decoded into these structs first and then validated into the
//! shared types, so a malformed body fails here instead of leaking bad values
//! into displayed counters.
use cashback_votes_shared::types::{
    SuggestionStatus, VotableId, VotableKind, VotableSnapshot, VotableStatus, VoteConfirmation,
    VoteDirection, VoteState, VotesCount,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ApiError;

#[derive(Debug, Serialize)]
pub(crate) struct VoteRequest {
    pub vote_type: VoteDirection,
}

/// Body returned by both vote endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct VoteResponse {
    pub upvotes: u32,
    pub downvotes: u32,
    pub user_vote: VoteState,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub accepted: bool,
    #[serde(default)]
    pub is_verified: Option<bool>,
}

impl VoteResponse {
    pub fn into_confirmation(self, kind: VotableKind) -> Result<VoteConfirmation, ApiError> {
        let counts = VotesCount::new(self.upvotes, self.downvotes);

        if let Some(score) = self.score {
            if score != counts.score() {
                return Err(ApiError::invalid_payload(format!(
                    "score {} does not match {} up / {} down",
                    score, counts.upvotes, counts.downvotes
                )));
            }
        }

        let status = self
            .status
            .as_deref()
            .map(|value| VotableStatus::parse(kind, value))
            .transpose()?;

        if let (Some(is_verified), Some(status)) = (self.is_verified, status) {
            if is_verified != status.is_verified() {
                return Err(ApiError::invalid_payload(format!(
                    "is_verified={} contradicts status {}",
                    is_verified, status
                )));
            }
        }

        if self.accepted && kind != VotableKind::Suggestion {
            return Err(ApiError::invalid_payload("only suggestions can be accepted"));
        }

        Ok(VoteConfirmation {
            counts,
            user_vote: self.user_vote,
            status,
            accepted: self.accepted,
        })
    }
}

/// Subset of `GET /entries/{id}` used for voting.
#[derive(Debug, Deserialize)]
pub(crate) struct EntryPayload {
    pub id: Uuid,
    pub status: String,
    pub upvote_count: u32,
    pub downvote_count: u32,
    #[serde(default)]
    pub user_vote: VoteState,
}

impl EntryPayload {
    pub fn into_snapshot(self) -> Result<VotableSnapshot, ApiError> {
        let status = VotableStatus::parse(VotableKind::Entry, &self.status)?;
        Ok(VotableSnapshot::new(
            VotableId::entry(self.id),
            VotesCount::new(self.upvote_count, self.downvote_count),
            self.user_vote,
        )
        .with_status(status))
    }
}

/// One element of `GET /entries/{id}/suggestions`.
#[derive(Debug, Deserialize)]
pub(crate) struct SuggestionPayload {
    pub id: Uuid,
    pub upvotes: u32,
    pub downvotes: u32,
    #[serde(default)]
    pub user_vote: VoteState,
    #[serde(default)]
    pub status: Option<String>,
}

impl SuggestionPayload {
    pub fn into_snapshot(self) -> Result<VotableSnapshot, ApiError> {
        // The listing only returns pending suggestions and may omit the field.
        let status = match self.status.as_deref() {
            Some(value) => VotableStatus::parse(VotableKind::Suggestion, value)?,
            None => VotableStatus::Suggestion(SuggestionStatus::Pending),
        };
        Ok(VotableSnapshot::new(
            VotableId::suggestion(self.id),
            VotesCount::new(self.upvotes, self.downvotes),
            self.user_vote,
        )
        .with_status(status))
    }
}
