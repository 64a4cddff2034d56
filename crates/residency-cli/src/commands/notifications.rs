//! Resident notification commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use residency_core::AppError;
use residency_core::types::id::NotificationId;
use residency_entity::user::UserRole;

use crate::output::{self, OutputFormat};
use crate::state::AppState;

/// Arguments for notification commands
#[derive(Debug, Args)]
pub struct NotificationArgs {
    /// Notification subcommand
    #[command(subcommand)]
    pub command: NotificationCommand,
}

/// Notification subcommands
#[derive(Debug, Subcommand)]
pub enum NotificationCommand {
    /// List your notifications, newest first
    List {
        /// Only unread correction requests
        #[arg(long)]
        pending: bool,
    },
    /// Mark a notification as read
    Read {
        /// Notification ID
        id: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    id: String,
    journal: String,
    created: String,
    status: String,
    message: String,
}

/// Execute notification commands
pub async fn execute(
    args: &NotificationArgs,
    state: &AppState,
    as_user: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = state.actor_with_role(as_user, UserRole::Resident).await?;

    match &args.command {
        NotificationCommand::List { pending } => {
            let notifications = if *pending {
                state.notifications.pending_corrections(&ctx.user_id).await?
            } else {
                state.notifications.list_for_resident(&ctx.user_id).await?
            };
            let rows: Vec<NotificationRow> = notifications
                .iter()
                .map(|n| NotificationRow {
                    id: n.id.to_string(),
                    journal: n.journal_id.to_string(),
                    created: n.created_at.format("%d/%m/%Y %H:%M").to_string(),
                    status: n.status.to_string(),
                    message: n.message.clone(),
                })
                .collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                let unread = state.notifications.unread_count(&ctx.user_id).await?;
                output::print_kv("Unread", &unread.to_string());
            }
        }
        NotificationCommand::Read { id } => {
            let id: NotificationId = super::parse_id(id, "notification")?;
            let owned = state
                .notifications
                .list_for_resident(&ctx.user_id)
                .await?
                .iter()
                .any(|n| n.id == id);
            if !owned || !state.notifications.mark_read(&id).await? {
                return Err(AppError::not_found(format!("Notification {id} not found")));
            }
            output::print_success(&format!("Notification {} marked read", id.short()));
        }
    }

    Ok(())
}
