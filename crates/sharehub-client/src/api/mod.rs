//! Typed access to the ShareHub REST API.
//!
//! [`ShareHubApi`] is the seam the views depend on; [`ShareHubClient`] is the
//! reqwest-backed implementation.

pub mod auth;
pub mod client;
pub mod explore;
pub mod upload;

use async_trait::async_trait;

use sharehub_auth::{LoginCredentials, Registration};
use sharehub_entity::Resource;

use crate::error::Result;
use crate::types::{LoginResponse, RegisterResponse, UploadRequest, UploadResponse};

pub use auth::AuthClient;
pub use client::ShareHubClient;
pub use explore::ExploreClient;
pub use upload::UploadClient;

/// Path prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Operations the client views need from the backend.
#[async_trait]
pub trait ShareHubApi: Send + Sync {
    /// `POST /api/v1/login`.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse>;

    /// `POST /api/v1/register`.
    async fn register(&self, registration: &Registration) -> Result<RegisterResponse>;

    /// `GET /api/v1/explore`, unauthenticated.
    async fn explore(&self) -> Result<Vec<Resource>>;

    /// `POST /api/v1/upload` with an optional bearer token.
    async fn upload(&self, request: &UploadRequest, token: Option<&str>)
    -> Result<UploadResponse>;
}
