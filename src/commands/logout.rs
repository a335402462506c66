//! Logout CLI command.

use super::Context;
use crate::output;
use sharehub_core::error::AppError;

/// Execute the logout command
pub fn execute(ctx: &mut Context) -> Result<(), AppError> {
    let was_logged_in = ctx.session.is_logged_in();
    ctx.session.logout()?;

    if was_logged_in {
        output::print_success("Logged out");
    } else {
        output::print_warning("No session was active");
    }
    Ok(())
}
