//! Cashback Votes Entry Point
//!
//! Casts a single vote on a cashback entry or rate suggestion and logs the
//! reconciled counts.

use std::env;

use cashback_votes::{AppError, Dependencies, TracingSink, VoteCommand, run_vote};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cashback_votes=info,cashback_votes_engine=info"));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    let command = match VoteCommand::parse(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            error!(error = %e, "Invalid arguments");
            return Err(e);
        }
    };

    let deps = match Dependencies::new() {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    match run_vote(&command, deps.api.as_ref(), &deps.session, &TracingSink).await {
        Ok(outcome) => {
            info!(
                upvotes = outcome.counts.upvotes,
                downvotes = outcome.counts.downvotes,
                user_vote = %outcome.user_vote,
                status = %outcome.status.map(|s| s.to_string()).unwrap_or_default(),
                "Done"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Vote did not go through");
            Err(e)
        }
    }
}
