//! Token store trait for pluggable bearer-token persistence.

use crate::result::AppResult;

/// Durable storage for the single bearer token.
///
/// The session context and the upload form are the only callers. The file
/// backed store and the in-memory store used by tests both live in
/// `sharehub-auth`.
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    /// Return the stored token, if any.
    fn load(&self) -> AppResult<Option<String>>;

    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str) -> AppResult<()>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> AppResult<()>;
}
