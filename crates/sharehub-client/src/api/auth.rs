//! Login and registration endpoints.

use reqwest::Client;
use tracing::{debug, info};

use sharehub_auth::{LoginCredentials, Registration};

use super::API_PREFIX;
use super::client::read_json;
use crate::error::Result;
use crate::types::{LoginResponse, RegisterResponse};

/// Authentication client.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Exchange email and password for a bearer token.
    ///
    /// A 2xx answer without a token is returned as-is; the caller decides
    /// how to report it.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        let url = format!("{}{}/login", self.base_url, API_PREFIX);
        debug!(url = %url, email = %credentials.email, "Logging in");

        let response = self.http.post(&url).json(credentials).send().await?;
        let login: LoginResponse = read_json(response, "login response").await?;

        if login.token.is_some() {
            info!(email = %credentials.email, "Login accepted");
        }
        Ok(login)
    }

    /// Create an account.
    pub async fn register(&self, registration: &Registration) -> Result<RegisterResponse> {
        let url = format!("{}{}/register", self.base_url, API_PREFIX);
        debug!(url = %url, email = %registration.email, "Registering");

        let response = self.http.post(&url).json(registration).send().await?;
        read_json(response, "register response").await
    }
}
