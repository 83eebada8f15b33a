use serde::{Deserialize, Serialize};

/// Represents the aggregated vote counts of a votable.
///
/// Counts are unsigned so that a negative tally cannot be represented;
/// applying a delta that would go below zero saturates at zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VotesCount {
    pub upvotes: u32,
    pub downvotes: u32,
}

impl VotesCount {
    pub fn new(upvotes: u32, downvotes: u32) -> Self {
        Self { upvotes, downvotes }
    }

    /// Returns the counts after applying `delta`.
    pub fn apply(&self, delta: VotesDelta) -> Self {
        Self {
            upvotes: self.upvotes.saturating_add_signed(delta.upvotes),
            downvotes: self.downvotes.saturating_add_signed(delta.downvotes),
        }
    }

    /// Net score, `upvotes - downvotes`.
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }
}

/// Signed change to apply to a `VotesCount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VotesDelta {
    pub upvotes: i32,
    pub downvotes: i32,
}

impl VotesDelta {
    pub const fn new(upvotes: i32, downvotes: i32) -> Self {
        Self { upvotes, downvotes }
    }

    /// True when both counters move, i.e. the vote switched sides.
    pub fn is_switch(&self) -> bool {
        self.upvotes != 0 && self.downvotes != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_delta() {
        let counts = VotesCount::new(3, 1);
        assert_eq!(counts.apply(VotesDelta::new(1, 0)), VotesCount::new(4, 1));
        assert_eq!(counts.apply(VotesDelta::new(-1, 1)), VotesCount::new(2, 2));
    }

    #[test]
    fn test_apply_delta_saturates_at_zero() {
        let counts = VotesCount::new(0, 0);
        assert_eq!(counts.apply(VotesDelta::new(-1, -1)), VotesCount::new(0, 0));
    }

    #[test]
    fn test_score() {
        assert_eq!(VotesCount::new(2, 5).score(), -3);
    }

    #[test]
    fn test_negative_counts_rejected_on_decode() {
        assert!(serde_json::from_str::<VotesCount>(r#"{"upvotes":-1,"downvotes":0}"#).is_err());
    }
}
