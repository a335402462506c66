//! Remote API configuration.

use serde::{Deserialize, Serialize};

/// Settings for the HTTP client talking to the ShareHub backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without the `/api/v1` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Optional request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_user_agent() -> String {
    format!("ShareHub/{}", env!("CARGO_PKG_VERSION"))
}
