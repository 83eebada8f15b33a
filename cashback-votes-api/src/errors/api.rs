//! Error types for the vote API.
//! Defines the errors that can occur while fetching snapshots or casting votes.
use cashback_votes_shared::SharedTypeError;
use thiserror::Error;

/// Represents errors that can occur while talking to the backend.
///
/// Every variant means the request did not produce an authoritative result,
/// so callers holding an optimistic update must roll it back.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend rejected the session (401/403).
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unexpected status {code} from {url}")]
    Status { code: u16, url: String },

    /// The response body did not match the expected schema.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Mock error: {0}")]
    Mock(String),
}

impl ApiError {
    /// Create an invalid payload error.
    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::InvalidPayload(msg.into())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<SharedTypeError> for ApiError {
    fn from(err: SharedTypeError) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}

/// Failures a `MockVoteApi` can be told to produce on its next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockFailure {
    Unauthorized,
    Status(u16),
    Network,
}

impl From<MockFailure> for ApiError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::Unauthorized => ApiError::Unauthorized,
            MockFailure::Status(code) => ApiError::Status {
                code,
                url: "mock://".to_string(),
            },
            MockFailure::Network => ApiError::Mock("connection refused".to_string()),
        }
    }
}
