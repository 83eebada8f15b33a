use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SharedTypeError;
use crate::types::VotableKind;

/// Moderation status of a cashback entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    /// Enough upvotes and no downvotes.
    Verified,
    /// Was verified, then received a downvote.
    Disputed,
    Rejected,
}

/// Lifecycle status of a rate suggestion.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    /// Reached quorum; the proposed rate replaced the entry's rate.
    Accepted,
    Rejected,
}

/// Status of a votable, tagged by its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VotableStatus {
    Entry(EntryStatus),
    Suggestion(SuggestionStatus),
}

impl VotableStatus {
    /// Parses a backend status string for the given votable kind.
    pub fn parse(kind: VotableKind, value: &str) -> Result<Self, SharedTypeError> {
        let invalid = || SharedTypeError::InvalidStatus {
            kind,
            value: value.to_string(),
        };

        match kind {
            VotableKind::Entry => match value {
                "pending" => Ok(Self::Entry(EntryStatus::Pending)),
                "verified" => Ok(Self::Entry(EntryStatus::Verified)),
                "disputed" => Ok(Self::Entry(EntryStatus::Disputed)),
                "rejected" => Ok(Self::Entry(EntryStatus::Rejected)),
                _ => Err(invalid()),
            },
            VotableKind::Suggestion => match value {
                "pending" => Ok(Self::Suggestion(SuggestionStatus::Pending)),
                "accepted" => Ok(Self::Suggestion(SuggestionStatus::Accepted)),
                "rejected" => Ok(Self::Suggestion(SuggestionStatus::Rejected)),
                _ => Err(invalid()),
            },
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Entry(EntryStatus::Verified))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry(EntryStatus::Pending) | Self::Suggestion(SuggestionStatus::Pending) => {
                "pending"
            }
            Self::Entry(EntryStatus::Verified) => "verified",
            Self::Entry(EntryStatus::Disputed) => "disputed",
            Self::Entry(EntryStatus::Rejected) | Self::Suggestion(SuggestionStatus::Rejected) => {
                "rejected"
            }
            Self::Suggestion(SuggestionStatus::Accepted) => "accepted",
        }
    }
}

impl fmt::Display for VotableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
