//! Main ShareHub API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use sharehub_auth::{LoginCredentials, Registration};
use sharehub_core::config::ApiConfig;
use sharehub_entity::Resource;

use super::{AuthClient, ExploreClient, ShareHubApi, UploadClient};
use crate::error::{ClientError, Result};
use crate::types::{LoginResponse, RegisterResponse, UploadRequest, UploadResponse};

/// reqwest-backed client for one ShareHub backend.
///
/// Requests are never retried and, unless configured, have no timeout.
#[derive(Debug, Clone)]
pub struct ShareHubClient {
    http: Client,
    base_url: String,
}

impl ShareHubClient {
    /// Create a client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        debug!(base_url = %base_url, "API client created");
        Ok(Self { http, base_url })
    }

    /// Normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client for the login and register endpoints.
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.http, &self.base_url)
    }

    /// Client for the explore feed.
    pub fn explore_client(&self) -> ExploreClient<'_> {
        ExploreClient::new(&self.http, &self.base_url)
    }

    /// Client for uploads.
    pub fn upload_client(&self) -> UploadClient<'_> {
        UploadClient::new(&self.http, &self.base_url)
    }
}

#[async_trait]
impl ShareHubApi for ShareHubClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        self.auth().login(credentials).await
    }

    async fn register(&self, registration: &Registration) -> Result<RegisterResponse> {
        self.auth().register(registration).await
    }

    async fn explore(&self) -> Result<Vec<Resource>> {
        self.explore_client().feed().await
    }

    async fn upload(
        &self,
        request: &UploadRequest,
        token: Option<&str>,
    ) -> Result<UploadResponse> {
        self.upload_client().upload(request, token).await
    }
}

/// Decode a success body, or turn an error status into [`ClientError::ServerError`].
///
/// The error message is the body's `message` field when it has one,
/// otherwise the raw body text.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse {what}: {e}")))
    } else {
        let text = response.text().await.unwrap_or_default();
        let body_message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));

        Err(ClientError::ServerError {
            status: status.as_u16(),
            from_body: body_message.is_some(),
            message: body_message.unwrap_or(text),
        })
    }
}
