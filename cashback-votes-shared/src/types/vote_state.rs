use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SharedTypeError;

/// Represents the direction of a vote action clicked by a user.
///
/// There is no "remove" direction: a vote is only withdrawn by clicking
/// the currently active direction again.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    /// Indicates an upvote, the entry or suggestion is accurate.
    Up,
    /// Indicates a downvote, the entry or suggestion is inaccurate.
    Down,
}

impl VoteDirection {
    /// Returns the wire representation used by the backend (`"up"` or `"down"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDirection::Up => "up",
            VoteDirection::Down => "down",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteDirection {
    type Err = SharedTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(VoteDirection::Up),
            "down" => Ok(VoteDirection::Down),
            _ => Err(SharedTypeError::InvalidDirection(s.to_string())),
        }
    }
}

/// The acting user's current vote on a votable.
///
/// On the wire this is `"up"`, `"down"` or `null`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "Option<VoteDirection>", into = "Option<VoteDirection>")]
pub enum VoteState {
    #[default]
    None,
    Up,
    Down,
}

impl VoteState {
    /// Returns the active direction, if any.
    pub fn direction(&self) -> Option<VoteDirection> {
        match self {
            VoteState::None => None,
            VoteState::Up => Some(VoteDirection::Up),
            VoteState::Down => Some(VoteDirection::Down),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, VoteState::None)
    }
}

impl From<VoteDirection> for VoteState {
    fn from(direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Up => VoteState::Up,
            VoteDirection::Down => VoteState::Down,
        }
    }
}

impl From<Option<VoteDirection>> for VoteState {
    fn from(direction: Option<VoteDirection>) -> Self {
        direction.map(VoteState::from).unwrap_or_default()
    }
}

impl From<VoteState> for Option<VoteDirection> {
    fn from(state: VoteState) -> Self {
        state.direction()
    }
}

impl fmt::Display for VoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            Some(direction) => direction.fmt(f),
            None => f.write_str("none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("up".parse::<VoteDirection>(), Ok(VoteDirection::Up));
        assert_eq!(" DOWN ".parse::<VoteDirection>(), Ok(VoteDirection::Down));
    }

    #[test]
    fn test_parse_remove_is_not_a_direction() {
        for input in ["none", "remove", "", "sideways"] {
            assert_eq!(
                input.parse::<VoteDirection>(),
                Err(SharedTypeError::InvalidDirection(input.to_string()))
            );
        }
    }

    #[test]
    fn test_vote_state_wire_format() {
        assert_eq!(serde_json::to_string(&VoteState::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&VoteState::None).unwrap(), "null");
        assert_eq!(serde_json::from_str::<VoteState>("\"down\"").unwrap(), VoteState::Down);
        assert_eq!(serde_json::from_str::<VoteState>("null").unwrap(), VoteState::None);
        assert!(serde_json::from_str::<VoteState>("\"maybe\"").is_err());
    }
}
