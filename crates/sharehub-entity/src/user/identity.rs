//! Identity of the logged-in user as read from the bearer token.

use serde::{Deserialize, Serialize};

/// The user a session belongs to.
///
/// Never stored on its own: it is re-derived from the token whenever the
/// session is built or the user logs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Display name.
    pub name: String,
    /// Backend user identifier, sent with uploads.
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl UserIdentity {
    /// Create a new identity.
    pub fn new(name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_id: user_id.into(),
        }
    }
}
