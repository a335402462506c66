//! Session inspection CLI command.

use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output;
use sharehub_auth::TokenDecoder;
use sharehub_core::error::AppError;

/// Identity display row
#[derive(Debug, Serialize, Tabled)]
struct IdentityRow {
    /// Display name
    name: String,
    /// User ID
    user_id: String,
    /// Expiry, if the token has one
    expires_at: String,
    /// Whether the expiry has passed
    expired: bool,
}

/// Execute the whoami command
pub fn execute(ctx: &Context) -> Result<(), AppError> {
    if !ctx.session.is_logged_in() {
        output::print_warning("Not logged in");
        return Ok(());
    }

    let Some(token) = ctx.session.store().load()? else {
        output::print_warning("Not logged in");
        return Ok(());
    };

    let claims = match TokenDecoder::new().decode_claims(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Stored token is unreadable");
            output::print_warning("A token is stored but its identity could not be read");
            return Ok(());
        }
    };

    let row = IdentityRow {
        name: claims.name.clone(),
        user_id: claims.user_id.clone(),
        expires_at: claims
            .expires_at()
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "never".to_string()),
        expired: claims.is_expired(),
    };
    output::print_item(&row, ctx.format);

    Ok(())
}
