//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field has a default, so an absent file yields a usable
//! configuration pointing at a local backend.

pub mod api;
pub mod logging;
pub mod session;
pub mod storage;
pub mod upload;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::logging::LoggingConfig;
pub use self::session::{LoginPolicy, SessionConfig};
pub use self::storage::StorageConfig;
pub use self::upload::{UploadConfig, UploadEncoding};

use crate::error::AppError;

/// Prefix for environment variable overrides (`SHAREHUB__API__BASE_URL`).
const ENV_PREFIX: &str = "SHAREHUB";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Token persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Session semantics.
    #[serde(default)]
    pub session: SessionConfig,
    /// Upload form behaviour.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the file at `path` with an environment-specific overlay
    /// (`config/<env>.toml`) and environment variables prefixed with
    /// `SHAREHUB__`. Missing files are skipped.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
