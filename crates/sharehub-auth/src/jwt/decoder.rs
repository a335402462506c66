//! Unverified decoding of the bearer token payload.
//!
//! The client never holds the signing secret, so the signature segment is
//! ignored and the payload is treated as untrusted input. Nothing here may
//! panic on malformed tokens.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use tracing::warn;

use sharehub_core::error::{AppError, ErrorKind};
use sharehub_entity::UserIdentity;

use super::claims::TokenClaims;

/// Reads identity claims out of a `header.payload.signature` token.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenDecoder;

impl TokenDecoder {
    /// Creates a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decodes the payload claims, reporting why decoding failed.
    ///
    /// Expiry is not checked.
    pub fn decode_claims(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_)) if segments.next().is_none() => payload,
            _ => {
                return Err(AppError::authentication(
                    "Invalid token format: expected three segments",
                ));
            }
        };

        // Tolerate padded and standard-alphabet payloads as well as base64url.
        let normalized: String = payload
            .trim_end_matches('=')
            .chars()
            .map(|c| match c {
                '+' => '-',
                '/' => '_',
                other => other,
            })
            .collect();

        let bytes = URL_SAFE_NO_PAD.decode(normalized.as_bytes()).map_err(|e| {
            AppError::with_source(
                ErrorKind::Authentication,
                format!("Invalid token payload encoding: {e}"),
                e,
            )
        })?;

        let claims: TokenClaims = serde_json::from_slice(&bytes)?;
        Ok(claims)
    }

    /// Decodes the user identity, or `None` when the token is unreadable.
    ///
    /// Failures are logged and never propagated.
    pub fn decode_identity(&self, token: &str) -> Option<UserIdentity> {
        match self.decode_claims(token) {
            Ok(claims) => Some(claims.identity()),
            Err(e) => {
                warn!(error = %e, "Error decoding token");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    fn token_with_payload(json: &str) -> String {
        format!("header.{}.sig", URL_SAFE_NO_PAD.encode(json))
    }

    #[test]
    fn test_decode_known_token() {
        let token = "header.eyJuYW1lIjoiQWxpY2UiLCJ1c2VySWQiOiIxMjMifQ.sig";
        let identity = TokenDecoder::new().decode_identity(token).unwrap();
        assert_eq!(identity, UserIdentity::new("Alice", "123"));
    }

    #[test]
    fn test_decode_full_claims() {
        let token =
            token_with_payload(r#"{"userId":"u-9","name":"Bob","iat":1700000000,"exp":1700003600}"#);
        let claims = TokenDecoder::new().decode_claims(&token).unwrap();
        assert_eq!(claims.user_id, "u-9");
        assert_eq!(claims.iat, Some(1_700_000_000));
        assert_eq!(claims.expires_at().unwrap().timestamp(), 1_700_003_600);
    }

    #[test]
    fn test_expired_token_still_decodes() {
        let token = token_with_payload(r#"{"userId":"1","name":"Old","exp":1}"#);
        let decoder = TokenDecoder::new();
        let claims = decoder.decode_claims(&token).unwrap();
        assert!(claims.is_expired());
        assert_eq!(decoder.decode_identity(&token).unwrap().name, "Old");
    }

    #[test]
    fn test_padded_standard_alphabet_payload() {
        let json = r#"{"userId":"?>?>","name":"Pad"}"#;
        let token = format!("h.{}.s", STANDARD.encode(json));
        let identity = TokenDecoder::new().decode_identity(&token).unwrap();
        assert_eq!(identity.user_id, "?>?>");
    }

    #[test]
    fn test_malformed_tokens_yield_none() {
        let decoder = TokenDecoder::new();
        let cases: [&str; 8] = [
            "",
            "no-dots-at-all",
            "only.two",
            "a.b.c.d",
            "header.!!!not-base64!!!.sig",
            &token_with_payload("not json"),
            &token_with_payload(r#"{"name":"NoId"}"#),
            &token_with_payload(r#"["array"]"#),
        ];

        for token in cases {
            assert!(decoder.decode_identity(token).is_none(), "token {token:?}");
        }
    }

    #[test]
    fn test_invalid_utf8_payload_yields_none() {
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]));
        assert!(TokenDecoder::new().decode_identity(&token).is_none());
    }
}
