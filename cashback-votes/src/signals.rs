use cashback_votes_engine::{SignalSink, VoteSignal};
use tracing::{error, info, warn};

/// Reports vote signals through the log, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SignalSink for TracingSink {
    fn emit(&self, signal: VoteSignal) {
        match signal {
            VoteSignal::LoginRequired => {
                warn!("Sign in to vote: set CASHBACK_ACCESS_TOKEN or CASHBACK_DEMO_MODE=true");
            }
            VoteSignal::VoteFailed { votable, reason } => {
                error!(votable = %votable, reason = %reason, "Failed to submit vote");
            }
            VoteSignal::VoteRecorded { votable, user_vote } => {
                info!(votable = %votable, user_vote = %user_vote, "Vote recorded");
            }
            VoteSignal::EntryStatusChanged { votable, from, to } => {
                let from = from.map(|s| s.to_string()).unwrap_or_else(|| "unknown".to_string());
                info!(votable = %votable, from = %from, to = %to, "Entry status changed");
            }
            VoteSignal::SuggestionAccepted { votable } => {
                info!(votable = %votable, "Suggestion accepted, entry rate updated");
            }
        }
    }
}
