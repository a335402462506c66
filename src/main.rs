//! ShareHub CLI entry point.
//!
//! Parses arguments, loads layered configuration, sets up tracing and
//! dispatches to a command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use sharehub_core::config::{AppConfig, LoggingConfig};

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env = std::env::var("SHAREHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&cli.config, &env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::debug!(path = %cli.config, env = %env, "Configuration loaded");

    if let Err(e) = cli.execute(config).await {
        output::print_error(&e.message);
        tracing::debug!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

/// Initialize tracing. Logs go to stderr so table and JSON output on
/// stdout stays clean.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
