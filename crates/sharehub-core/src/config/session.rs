//! Session configuration.

use serde::{Deserialize, Serialize};

/// Decides what "logged in" means when a stored token cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginPolicy {
    /// Any stored token counts as logged in, even if its payload is unreadable.
    #[default]
    TokenPresence,
    /// Logged in only when an identity could be decoded from the token.
    DecodedIdentity,
}

/// Session semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Login status policy.
    #[serde(default)]
    pub login_policy: LoginPolicy,
}
