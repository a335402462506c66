//! Token storage configuration.

use serde::{Deserialize, Serialize};

/// Where the bearer token is persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON key/value file holding the token.
    #[serde(default = "default_token_path")]
    pub token_path: String,
    /// Key under which the token is stored.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
            token_key: default_token_key(),
        }
    }
}

fn default_token_path() -> String {
    "data/session.json".to_string()
}

fn default_token_key() -> String {
    "token".to_string()
}
