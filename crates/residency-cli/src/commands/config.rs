//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use residency_core::AppError;
use residency_core::config::AppConfig;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Check the configuration for unsupported values
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format, |c| {
                println!("[store]");
                output::print_kv("provider", &c.store.provider);
                output::print_kv("data_dir", &c.store.data_dir);
                output::print_kv("seed_dir", &c.store.seed_dir);
                println!("[journal]");
                output::print_kv("enforce_punch_sequence", &c.journal.enforce_punch_sequence.to_string());
                output::print_kv("strict_transitions", &c.journal.strict_transitions.to_string());
                output::print_kv("default_correction_note", &c.journal.default_correction_note);
                println!("[logging]");
                output::print_kv("level", &c.logging.level);
                output::print_kv("format", &c.logging.format);
            });
        }
        ConfigCommand::Validate => match validate(config) {
            Ok(()) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv("Store", &config.store.provider);
                output::print_kv("Logging", &format!("{} ({})", config.logging.level, config.logging.format));
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}

/// Reject values the application cannot act on
pub fn validate(config: &AppConfig) -> Result<(), AppError> {
    if !matches!(config.store.provider.as_str(), "file" | "memory") {
        return Err(AppError::configuration(format!(
            "store.provider must be 'file' or 'memory', got '{}'",
            config.store.provider
        )));
    }
    if !matches!(config.logging.format.as_str(), "json" | "pretty") {
        return Err(AppError::configuration(format!(
            "logging.format must be 'json' or 'pretty', got '{}'",
            config.logging.format
        )));
    }
    if config.journal.default_correction_note.trim().is_empty() {
        return Err(AppError::configuration(
            "journal.default_correction_note must not be empty",
        ));
    }
    Ok(())
}
