//! Login CLI command.

use clap::Args;

use super::Context;
use crate::output;
use sharehub_auth::LoginCredentials;
use sharehub_client::views::LoginView;
use sharehub_core::error::{AppError, ErrorKind};

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email (will prompt if not provided)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute the login command
pub async fn execute(args: &LoginArgs, ctx: &mut Context) -> Result<(), AppError> {
    let email = super::text_or_prompt(args.email.as_ref(), "Email")?;
    let password = super::password_or_prompt(args.password.as_ref(), false)?;
    let credentials = LoginCredentials::new(email, password);

    let client = ctx.client()?;
    let route = LoginView::submit(&client, &mut ctx.session, &credentials)
        .await
        .map_err(|notice| super::notice_error(ErrorKind::Authentication, notice))?;

    match ctx.session.user() {
        Some(user) => output::print_success(&format!("Logged in as {}", user.name)),
        None => output::print_warning("Logged in, but the token carries no readable identity"),
    }
    output::print_kv("Next", &format!("sharehub {}", route.path().trim_start_matches('/')));

    Ok(())
}
