use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::debug;

use tally_core::{LinkedAccount, Profile, ProfilePatch};

use crate::api::{ApiErrorBody, ClearAccountsResponse};
use crate::error::{ClientError, ClientResult, ErrorShape};

/// Typed client for the Tally portal API.
///
/// Mutation endpoints return the authoritative post-write state so callers
/// can reconcile their caches without an extra round trip.
#[derive(Clone)]
pub struct PortalClient {
    http_client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
        })
    }

    /// Attach the session bearer token used for authenticated calls.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Fetch the authenticated user's profile.
    pub async fn me(&self) -> ClientResult<Profile> {
        let url = format!("{}/api/user/me", self.base_url);
        debug!("fetching current profile");

        let response = self.authorize(self.http_client.get(&url)).send().await?;
        Self::parse_success(response).await
    }

    /// Apply a partial profile update; returns the authoritative post-write
    /// profile (server-derived fields included).
    pub async fn update_profile(&self, patch: &ProfilePatch) -> ClientResult<Profile> {
        let url = format!("{}/api/user", self.base_url);
        debug!("updating profile");

        let response = self
            .authorize(self.http_client.patch(&url))
            .json(patch)
            .send()
            .await?;
        Self::parse_success(response).await
    }

    /// Delete the authenticated user's account and all associated data.
    pub async fn delete_account(&self) -> ClientResult<()> {
        let url = format!("{}/api/user", self.base_url);
        debug!("deleting account");

        let response = self.authorize(self.http_client.delete(&url)).send().await?;
        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            _ => Err(Self::classify(response).await),
        }
    }

    /// List the user's stored linked accounts.
    pub async fn linked_accounts(&self) -> ClientResult<Vec<LinkedAccount>> {
        let url = format!("{}/api/accounts", self.base_url);

        let response = self.authorize(self.http_client.get(&url)).send().await?;
        Self::parse_success(response).await
    }

    /// Fetch one linked account by id; a missing id classifies as not found.
    pub async fn linked_account(&self, account_id: &str) -> ClientResult<LinkedAccount> {
        let url = format!("{}/api/accounts/{}", self.base_url, account_id);

        let response = self.authorize(self.http_client.get(&url)).send().await?;
        Self::parse_success(response).await
    }

    /// Delete all stored linked accounts; returns how many were removed.
    pub async fn clear_linked_accounts(&self) -> ClientResult<u64> {
        let url = format!("{}/api/accounts", self.base_url);
        debug!("clearing stored linked accounts");

        let response = self.authorize(self.http_client.delete(&url)).send().await?;
        let cleared: ClearAccountsResponse = Self::parse_success(response).await?;
        Ok(cleared.deleted)
    }

    async fn parse_success<T: serde::de::DeserializeOwned>(response: Response) -> ClientResult<T> {
        if !response.status().is_success() {
            return Err(Self::classify(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Turn a non-success response into the portal error classification.
    ///
    /// The status always comes from the transport; code and message come
    /// from the body when it parses, and stay absent otherwise so renderers
    /// fall back to the defaults.
    async fn classify(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response.json::<ApiErrorBody>().await.unwrap_or_default();

        ClientError::Api(ErrorShape {
            http_status: Some(status),
            code: body.code,
            message: body.message,
        })
    }
}
