//! Claims carried in the payload segment of a ShareHub bearer token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sharehub_entity::UserIdentity;

/// Payload of a bearer token as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// Backend user identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiration timestamp (seconds since epoch).
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// The identity exposed to the rest of the client.
    pub fn identity(&self) -> UserIdentity {
        UserIdentity::new(self.name.clone(), self.user_id.clone())
    }

    /// Returns the expiration as a `DateTime<Utc>`, if the token carries one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Checks whether this token has expired.
    ///
    /// Informational only: decoding never rejects an expired token.
    pub fn is_expired(&self) -> bool {
        self.exp.is_some_and(|exp| Utc::now().timestamp() >= exp)
    }
}
