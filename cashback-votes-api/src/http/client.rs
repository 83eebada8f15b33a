use std::time::Duration;

use async_trait::async_trait;
use cashback_votes_shared::types::{
    VotableId, VotableKind, VotableSnapshot, VoteConfirmation, VoteDirection,
};
use reqwest::{Client as ReqwestClient, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::http::payload::{EntryPayload, SuggestionPayload, VoteRequest, VoteResponse};
use crate::interfaces::VoteApi;

/// Production vote API client that talks to the backend over HTTP.
///
/// # Example
///
/// ```ignore
/// use cashback_votes_api::{HttpVoteApi, VoteApi};
///
/// let api = HttpVoteApi::new("http://localhost:8000", Some("token".to_string()))?;
/// let snapshot = api.fetch_entry(entry_id).await?;
/// ```
pub struct HttpVoteApi {
    base_url: String,
    access_token: Option<String>,
    client: ReqwestClient,
}

impl HttpVoteApi {
    /// Creates a client with reqwest's default settings.
    pub fn new(base_url: &str, access_token: Option<String>) -> Self {
        Self::with_client(base_url, access_token, ReqwestClient::new())
    }

    /// Creates a client whose requests time out after `timeout`.
    pub fn with_timeout(
        base_url: &str,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, access_token, client))
    }

    pub fn with_client(
        base_url: &str,
        access_token: Option<String>,
        client: ReqwestClient,
    ) -> Self {
        HttpVoteApi {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn vote_path(votable: &VotableId) -> String {
        match votable.kind {
            VotableKind::Entry => format!("/votes/entries/{}", votable.id),
            VotableKind::Suggestion => format!("/entries/suggestions/{}/vote", votable.id),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends `request`, maps non-2xx statuses and decodes the body as `T`.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "Backend responded");

        match status {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => return Err(ApiError::NotFound(url.to_string())),
            s => {
                return Err(ApiError::Status {
                    code: s.as_u16(),
                    url: url.to_string(),
                });
            }
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl VoteApi for HttpVoteApi {
    async fn fetch_entry(&self, entry_id: Uuid) -> Result<VotableSnapshot, ApiError> {
        let url = self.url(&format!("/entries/{}", entry_id));
        let payload: EntryPayload = self.send(self.client.get(&url), &url).await?;
        payload.into_snapshot()
    }

    async fn fetch_suggestions(&self, entry_id: Uuid) -> Result<Vec<VotableSnapshot>, ApiError> {
        let url = self.url(&format!("/entries/{}/suggestions", entry_id));
        let payloads: Vec<SuggestionPayload> = self.send(self.client.get(&url), &url).await?;
        payloads
            .into_iter()
            .map(SuggestionPayload::into_snapshot)
            .collect()
    }

    async fn cast_vote(
        &self,
        votable: VotableId,
        direction: VoteDirection,
    ) -> Result<VoteConfirmation, ApiError> {
        let url = self.url(&Self::vote_path(&votable));
        debug!(votable = %votable, direction = %direction, "Casting vote");

        let request = self
            .client
            .post(&url)
            .json(&VoteRequest { vote_type: direction });
        let response: VoteResponse = self.send(request, &url).await?;
        response.into_confirmation(votable.kind)
    }
}
