//! Loads the targeted votable and casts one vote on it.
use cashback_votes_api::VoteApi;
use cashback_votes_engine::{Session, SignalSink, VoteController, VoteOutcome};
use cashback_votes_shared::types::VotableSnapshot;
use tracing::{debug, info};

use crate::cli::{Target, VoteCommand};
use crate::errors::AppError;

/// Runs `command` against `api`, reporting user-facing signals to `signals`.
///
/// # Errors
///
/// * `AppError::Api` - The votable could not be loaded
/// * `AppError::SuggestionNotFound` - The entry does not list the suggestion
/// * `AppError::Vote` - The vote was refused or rolled back
pub async fn run_vote(
    command: &VoteCommand,
    api: &dyn VoteApi,
    session: &Session,
    signals: &dyn SignalSink,
) -> Result<VoteOutcome, AppError> {
    let snapshot = load_snapshot(command.target, api).await?;
    debug!(
        votable = %snapshot.votable,
        upvotes = snapshot.counts.upvotes,
        downvotes = snapshot.counts.downvotes,
        user_vote = %snapshot.user_vote,
        "Loaded votable"
    );

    let mut controller = VoteController::new(snapshot);
    let outcome = controller
        .cast(session, command.direction, api, signals)
        .await?;

    info!(
        votable = %controller.votable(),
        upvotes = outcome.counts.upvotes,
        downvotes = outcome.counts.downvotes,
        score = controller.score(),
        user_vote = %outcome.user_vote,
        "Vote confirmed"
    );

    Ok(outcome)
}

async fn load_snapshot(target: Target, api: &dyn VoteApi) -> Result<VotableSnapshot, AppError> {
    match target {
        Target::Entry(entry_id) => Ok(api.fetch_entry(entry_id).await?),
        Target::Suggestion {
            entry_id,
            suggestion_id,
        } => api
            .fetch_suggestions(entry_id)
            .await?
            .into_iter()
            .find(|s| s.votable.id == suggestion_id)
            .ok_or(AppError::SuggestionNotFound {
                entry_id,
                suggestion_id,
            }),
    }
}
