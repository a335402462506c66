//! File-backed token store.
//!
//! Tokens live in a small JSON object on disk, keyed like browser local
//! storage, so other client state can share the file later without a
//! format change.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use sharehub_core::config::StorageConfig;
use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;
use sharehub_core::traits::TokenStore;

/// Persists the token under a fixed key in a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    /// Path of the backing file.
    path: PathBuf,
    /// Key the token is stored under.
    key: String,
}

impl FileTokenStore {
    /// Create a store for the given file and key.
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Create a store from storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.token_path, &config.token_key)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> AppResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(entries) => Ok(entries),
            _ => Err(AppError::serialization(format!(
                "Token file {} is not a JSON object",
                self.path.display()
            ))),
        }
    }

    /// Entries to rewrite, starting over when the file is unreadable.
    fn entries_for_write(&self) -> Map<String, Value> {
        self.read_entries().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Discarding unreadable token file");
            Map::new()
        })
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> AppResult<Option<String>> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(&self.key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn save(&self, token: &str) -> AppResult<()> {
        let mut entries = self.entries_for_write();
        entries.insert(self.key.clone(), Value::String(token.to_string()));
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut entries = self.entries_for_write();
        entries.remove(&self.key);
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), "Token cleared");
        Ok(())
    }
}
