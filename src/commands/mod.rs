//! CLI command definitions and dispatch.

pub mod explore;
pub mod login;
pub mod logout;
pub mod register;
pub mod upload;
pub mod whoami;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use sharehub_auth::{FileTokenStore, Navigation, Route, RouteGuard, Session, SessionContext};
use sharehub_client::ShareHubClient;
use sharehub_client::views::Notice;
use sharehub_core::config::AppConfig;
use sharehub_core::error::{AppError, ErrorKind};
use sharehub_core::traits::TokenStore;

/// ShareHub: share and discover learning resources
#[derive(Debug, Parser)]
#[command(name = "sharehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login(login::LoginArgs),
    /// Create an account
    Register(register::RegisterArgs),
    /// Forget the stored session token
    Logout,
    /// Show the identity carried by the stored token
    Whoami,
    /// Browse the shared resource feed
    Explore(explore::ExploreArgs),
    /// Share a new resource
    Upload(upload::UploadArgs),
}

impl Commands {
    /// The view a command stands for. Commands without one skip the guard.
    pub fn route(&self) -> Option<Route> {
        match self {
            Self::Login(_) => Some(Route::Login),
            Self::Register(_) => Some(Route::Register),
            Self::Explore(_) => Some(Route::Explore),
            Self::Upload(_) => Some(Route::Upload),
            Self::Logout | Self::Whoami => None,
        }
    }
}

/// State shared by every command.
pub struct Context {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Session restored from the token file.
    pub session: SessionContext,
    /// Selected output format.
    pub format: OutputFormat,
}

impl Context {
    /// HTTP client for the configured backend.
    pub fn client(&self) -> Result<ShareHubClient, AppError> {
        ShareHubClient::new(&self.config.api).map_err(AppError::from)
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::from_config(&config.storage));
        let session = SessionContext::initialize(store, &config.session);

        if let Some(route) = self.command.route() {
            navigate(&route, session.session())?;
        }

        let mut ctx = Context {
            config,
            session,
            format: self.format,
        };

        match &self.command {
            Commands::Login(args) => login::execute(args, &mut ctx).await,
            Commands::Register(args) => register::execute(args, &ctx).await,
            Commands::Logout => logout::execute(&mut ctx),
            Commands::Whoami => whoami::execute(&ctx),
            Commands::Explore(args) => explore::execute(args, &ctx).await,
            Commands::Upload(args) => upload::execute(args, &ctx).await,
        }
    }
}

/// Run the route guard for a command's view.
pub fn navigate(route: &Route, session: &Session) -> Result<(), AppError> {
    match RouteGuard::check(route.path(), session) {
        Navigation::Render(_) => Ok(()),
        Navigation::Redirect(Route::Login) => Err(AppError::authentication(format!(
            "{} requires a session, run `sharehub login` first",
            route
        ))),
        Navigation::Redirect(target) => Err(AppError::validation(format!(
            "{} is not available, try {}",
            route, target
        ))),
    }
}

/// Turn a failed view notice into a command error.
pub fn notice_error(kind: ErrorKind, notice: Notice) -> AppError {
    AppError::new(kind, format!("{}: {}", notice.title, notice.description))
}

/// Use the given value or prompt for one.
pub fn text_or_prompt(value: Option<&String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {}", e))),
    }
}

/// Use the given password or prompt for one without echo.
pub fn password_or_prompt(value: Option<&String>, confirm: bool) -> Result<String, AppError> {
    if let Some(p) = value {
        return Ok(p.clone());
    }

    let mut prompt = dialoguer::Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    prompt
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use sharehub_entity::UserIdentity;

    fn logged_in() -> Session {
        Session {
            is_logged_in: true,
            user: Some(UserIdentity::new("Alice", "123")),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_upload_args_parse() {
        let cli = Cli::try_parse_from([
            "sharehub",
            "--format",
            "json",
            "upload",
            "--name",
            "Notes",
            "--category",
            "Math",
            "--description",
            "Lecture notes",
            "--link",
            "https://a.example",
            "--link",
            "https://b.example",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.command.route(), Some(Route::Upload));
        match cli.command {
            Commands::Upload(args) => {
                assert_eq!(args.name.as_deref(), Some("Notes"));
                assert_eq!(args.link.len(), 2);
                assert!(args.file.is_none());
            }
            other => panic!("Expected upload, got {other:?}"),
        }
    }

    #[test]
    fn test_guarded_commands_need_session() {
        let anonymous = Session::anonymous();

        let err = navigate(&Route::Upload, &anonymous).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert!(navigate(&Route::Explore, &anonymous).is_err());

        assert!(navigate(&Route::Login, &anonymous).is_ok());
        assert!(navigate(&Route::Register, &anonymous).is_ok());
        assert!(navigate(&Route::Upload, &logged_in()).is_ok());
    }

    #[test]
    fn test_session_free_commands_skip_guard() {
        let cli = Cli::try_parse_from(["sharehub", "whoami"]).unwrap();
        assert!(cli.command.route().is_none());

        let cli = Cli::try_parse_from(["sharehub", "logout"]).unwrap();
        assert!(cli.command.route().is_none());
    }
}
