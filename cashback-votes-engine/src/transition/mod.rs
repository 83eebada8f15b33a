//! This module defines the vote transition engine.
//!
//! The engine is a pure function of the acting user's current vote and the
//! direction they just clicked. It decides the next vote state and the exact
//! counter deltas to apply optimistically, before the backend confirms.
//!
//! | current | direction | next | delta (up, down) |
//! |---------|-----------|------|------------------|
//! | None    | Up        | Up   | (+1, 0)          |
//! | None    | Down      | Down | (0, +1)          |
//! | Up      | Up        | None | (-1, 0)          |
//! | Down    | Down      | None | (0, -1)          |
//! | Up      | Down      | Down | (-1, +1)         |
//! | Down    | Up        | Up   | (+1, -1)         |
use cashback_votes_shared::types::{VoteDirection, VoteState, VotesCount, VotesDelta};

use crate::errors::VoteError;

/// Which row family of the transition table a vote falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    NewVote,
    ToggleOff,
    Switch,
}

/// Result of applying a vote direction to a vote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    pub next: VoteState,
    pub delta: VotesDelta,
}

impl VoteTransition {
    pub fn kind(&self) -> TransitionKind {
        if self.delta.is_switch() {
            TransitionKind::Switch
        } else if self.next.is_none() {
            TransitionKind::ToggleOff
        } else {
            TransitionKind::NewVote
        }
    }

    /// Counts after applying this transition's delta to `counts`.
    pub fn apply_to(&self, counts: VotesCount) -> VotesCount {
        counts.apply(self.delta)
    }
}

/// Computes the next vote state and counter deltas for a click in `direction`.
///
/// Clicking the active direction withdraws the vote; clicking the other
/// direction switches sides; clicking from no vote casts a new one.
///
/// # Arguments
///
/// * `current` - The acting user's vote before the click
/// * `direction` - The direction that was clicked
///
/// # Returns
///
/// A `VoteTransition` with the next state and the delta for both counters.
pub fn apply_vote(current: VoteState, direction: VoteDirection) -> VoteTransition {
    let (next, upvotes, downvotes) = match (current, direction) {
        (VoteState::None, VoteDirection::Up) => (VoteState::Up, 1, 0),
        (VoteState::None, VoteDirection::Down) => (VoteState::Down, 0, 1),
        (VoteState::Up, VoteDirection::Up) => (VoteState::None, -1, 0),
        (VoteState::Down, VoteDirection::Down) => (VoteState::None, 0, -1),
        (VoteState::Up, VoteDirection::Down) => (VoteState::Down, -1, 1),
        (VoteState::Down, VoteDirection::Up) => (VoteState::Up, 1, -1),
    };

    VoteTransition {
        next,
        delta: VotesDelta::new(upvotes, downvotes),
    }
}

/// Parses a direction coming from outside the type system (CLI, config).
///
/// Only `up` and `down` are accepted. Withdrawing a vote is not a direction,
/// so `none` or `remove` fail with `InvalidDirection`.
pub fn parse_direction(input: &str) -> Result<VoteDirection, VoteError> {
    input
        .parse::<VoteDirection>()
        .map_err(|_| VoteError::InvalidDirection(input.to_string()))
}
