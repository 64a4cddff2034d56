//! CLI command definitions and dispatch.

pub mod activity;
pub mod config;
pub mod correction;
pub mod journal;
pub mod notifications;
pub mod punch;
pub mod review;
pub mod store;
pub mod views;

use std::str::FromStr;

use clap::{Parser, Subcommand};

use residency_core::AppError;
use residency_core::config::AppConfig;

use crate::output::OutputFormat;
use crate::state::AppState;

/// Residency time journal: punches, day activities and preceptor review
#[derive(Debug, Parser)]
#[command(name = "residency", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "RESIDENCY_CONFIG", default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Acting user id
    #[arg(long = "as", global = true, env = "RESIDENCY_USER")]
    pub as_user: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a clock punch or show today's state
    Punch(punch::PunchArgs),
    /// Record a day activity
    Activity(activity::ActivityArgs),
    /// Browse your journals
    Journal(journal::JournalArgs),
    /// Preceptor review queues and decisions
    Review(review::ReviewArgs),
    /// Your notifications
    Notifications(notifications::NotificationArgs),
    /// Resubmit a journal after a correction request
    Correction(correction::CorrectionArgs),
    /// Collection store maintenance
    Store(store::StoreArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, &self.config, config, self.format);
        }

        let state = AppState::build(config).await?;
        self.execute_with(&state).await
    }

    /// Execute against already-wired services
    pub async fn execute_with(&self, state: &AppState) -> Result<(), AppError> {
        let as_user = self.as_user.as_deref();
        match &self.command {
            Commands::Punch(args) => punch::execute(args, state, as_user, self.format).await,
            Commands::Activity(args) => activity::execute(args, state, as_user, self.format).await,
            Commands::Journal(args) => journal::execute(args, state, as_user, self.format).await,
            Commands::Review(args) => review::execute(args, state, as_user, self.format).await,
            Commands::Notifications(args) => {
                notifications::execute(args, state, as_user, self.format).await
            }
            Commands::Correction(args) => {
                correction::execute(args, state, as_user, self.format).await
            }
            Commands::Store(args) => store::execute(args, state, self.format).await,
            Commands::Config(_) => Err(AppError::internal(
                "Config commands run before services are wired",
            )),
        }
    }
}

/// Helper: parse a typed identifier argument
pub fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("Invalid {what} id: '{raw}'")))
}
