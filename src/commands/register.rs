//! Account registration CLI command.

use clap::Args;

use super::Context;
use crate::output;
use sharehub_auth::Registration;
use sharehub_client::views::RegisterView;
use sharehub_core::error::{AppError, ErrorKind};

/// Arguments for the register command
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Display name (will prompt if not provided)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Account email (will prompt if not provided)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password (will prompt with confirmation if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute the register command
pub async fn execute(args: &RegisterArgs, ctx: &Context) -> Result<(), AppError> {
    let name = super::text_or_prompt(args.name.as_ref(), "Name")?;
    let email = super::text_or_prompt(args.email.as_ref(), "Email")?;
    let password = super::password_or_prompt(args.password.as_ref(), true)?;
    let registration = Registration::new(name, email, password);

    let client = ctx.client()?;
    let (route, notice) = RegisterView::submit(&client, &registration)
        .await
        .map_err(|notice| super::notice_error(ErrorKind::ExternalService, notice))?;

    output::print_notice(&notice, ctx.format);
    output::print_kv("Next", &format!("sharehub {}", route.path().trim_start_matches('/')));

    Ok(())
}
