//! Collection store maintenance commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use residency_core::AppError;
use residency_core::traits::CollectionStore;
use residency_store::provider::COLLECTIONS;

use crate::output::{self, OutputFormat};
use crate::state::AppState;

/// Arguments for store commands
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Store subcommand
    #[command(subcommand)]
    pub command: StoreCommand,
}

/// Store subcommands
#[derive(Debug, Subcommand)]
pub enum StoreCommand {
    /// Seed every collection that has no data yet
    Init,
    /// Forget a collection so the next read seeds it again
    Reset {
        /// Collection name
        collection: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize)]
struct InitReport<'a> {
    backend: &'a str,
    seeded: Vec<&'static str>,
}

/// Execute store commands
pub async fn execute(
    args: &StoreArgs,
    state: &AppState,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        StoreCommand::Init => {
            if !state.store.health_check().await? {
                return Err(AppError::storage("Collection store is not available"));
            }
            let report = InitReport {
                backend: state.store.backend(),
                seeded: state.store.initialize_all().await?,
            };
            output::print_item(&report, format, |r| {
                if r.seeded.is_empty() {
                    output::print_warning("Every collection already holds data; nothing seeded");
                } else {
                    output::print_success(&format!("Seeded {}", r.seeded.join(", ")));
                }
                output::print_kv("Backend", r.backend);
            });
        }
        StoreCommand::Reset { collection, force } => {
            if !COLLECTIONS.contains(&collection.as_str()) {
                return Err(AppError::validation(format!(
                    "Unknown collection '{collection}'. Expected one of: {}",
                    COLLECTIONS.join(", ")
                )));
            }
            if !force {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!("Discard every record in '{collection}'?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
                if !confirmed {
                    output::print_warning("Aborted");
                    return Ok(());
                }
            }
            state.store.reset(collection).await?;
            output::print_success(&format!("Collection '{collection}' reset"));
        }
    }

    Ok(())
}
