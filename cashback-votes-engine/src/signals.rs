//! User-facing signals emitted by the vote controller.
//!
//! The view layer decides how to render them (toast, login dialog, reload);
//! the controller only reports what happened through a `SignalSink`.
use std::sync::Mutex;

use cashback_votes_shared::types::{VotableId, VotableStatus, VoteState};

/// Something the user should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteSignal {
    /// The user must sign in before voting; the caller should open the login prompt.
    LoginRequired,
    /// The vote could not be confirmed and local state was rolled back.
    VoteFailed { votable: VotableId, reason: String },
    /// The backend confirmed the vote.
    VoteRecorded { votable: VotableId, user_vote: VoteState },
    /// The vote moved an entry to a new status, e.g. `verified`.
    EntryStatusChanged {
        votable: VotableId,
        from: Option<VotableStatus>,
        to: VotableStatus,
    },
    /// A rate suggestion reached quorum; the parent entry's rate changed and
    /// should be reloaded.
    SuggestionAccepted { votable: VotableId },
}

/// Receiver of `VoteSignal`s, injected by whoever displays the votable.
pub trait SignalSink: Send + Sync {
    fn emit(&self, signal: VoteSignal);
}

/// Collects every emitted signal in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    signals: Mutex<Vec<VoteSignal>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signals(&self) -> Vec<VoteSignal> {
        self.signals.lock().unwrap().clone()
    }

    /// Returns and clears the collected signals.
    pub fn drain(&self) -> Vec<VoteSignal> {
        std::mem::take(&mut *self.signals.lock().unwrap())
    }
}

impl SignalSink for RecordingSink {
    fn emit(&self, signal: VoteSignal) {
        self.signals.lock().unwrap().push(signal);
    }
}
