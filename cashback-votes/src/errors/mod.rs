//! Error types for the cashback votes client.
//! Consolidates errors from argument parsing, configuration, the vote API and
//! the vote controller.
use cashback_votes_api::ApiError;
use cashback_votes_engine::VoteError;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Usage error: {0}")]
    Usage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Vote error: {0}")]
    Vote(#[from] VoteError),
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Suggestion {suggestion_id} not found on entry {entry_id}")]
    SuggestionNotFound { entry_id: Uuid, suggestion_id: Uuid },
}

impl AppError {
    /// Create a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
