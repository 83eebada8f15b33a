mod confirmation;
mod snapshot;
mod status;
mod votable;
mod vote_state;
mod votes_count;

pub use confirmation::VoteConfirmation;
pub use snapshot::VotableSnapshot;
pub use status::{EntryStatus, SuggestionStatus, VotableStatus};
pub use votable::{VotableId, VotableKind};
pub use vote_state::{VoteDirection, VoteState};
pub use votes_count::{VotesCount, VotesDelta};
