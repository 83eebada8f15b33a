use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kinds of things a user can vote on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VotableKind {
    /// A community-reported cashback entry (card + merchant + rate).
    Entry,
    /// A proposed correction to an entry's cashback rate.
    Suggestion,
}

impl fmt::Display for VotableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VotableKind::Entry => f.write_str("entry"),
            VotableKind::Suggestion => f.write_str("suggestion"),
        }
    }
}

/// Identifies a single votable.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VotableId {
    pub kind: VotableKind,
    pub id: Uuid,
}

impl VotableId {
    pub fn entry(id: Uuid) -> Self {
        Self { kind: VotableKind::Entry, id }
    }

    pub fn suggestion(id: Uuid) -> Self {
        Self { kind: VotableKind::Suggestion, id }
    }
}

impl fmt::Display for VotableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
