//! Retroactive punch correction.

use clap::{Args, Subcommand};

use residency_core::AppError;
use residency_core::types::id::{JournalId, NotificationId, UserId};
use residency_entity::user::UserRole;
use residency_service::PunchEdit;

use super::views::print_journal_detail;
use crate::output::{self, OutputFormat};
use crate::state::AppState;

/// Arguments for correction commands
#[derive(Debug, Args)]
pub struct CorrectionArgs {
    /// Correction subcommand
    #[command(subcommand)]
    pub command: CorrectionCommand,
}

/// Correction subcommands
#[derive(Debug, Subcommand)]
pub enum CorrectionCommand {
    /// Edit punch times and send the journal back to review
    Submit {
        /// Journal ID
        journal: String,
        /// Correction request notification ID
        notification: String,
        /// Punch edits as IDX=HH:MM (see `journal show` for indexes)
        #[arg(long = "set", value_name = "IDX=HH:MM")]
        edits: Vec<String>,
    },
}

/// Execute correction commands
pub async fn execute(
    args: &CorrectionArgs,
    state: &AppState,
    as_user: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = state.actor_with_role(as_user, UserRole::Resident).await?;

    match &args.command {
        CorrectionCommand::Submit {
            journal,
            notification,
            edits,
        } => {
            let journal_id: JournalId = super::parse_id(journal, "journal")?;
            let notification_id: NotificationId = super::parse_id(notification, "notification")?;
            let edits = edits
                .iter()
                .map(|raw| raw.parse::<PunchEdit>())
                .collect::<Result<Vec<_>, _>>()?;

            let owned = state
                .journals
                .journal_by_id(&journal_id)
                .await?
                .is_some_and(|j| j.resident_id == ctx.user_id);
            if !owned {
                return Err(AppError::not_found(format!("Journal {journal_id} not found")));
            }
            check_notification(state, &ctx.user_id, &journal_id, &notification_id).await?;

            let journal = state
                .journals
                .resubmit_after_correction(&journal_id, &edits, &notification_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Journal {journal_id} not found")))?;

            if format == OutputFormat::Table {
                output::print_success(&format!(
                    "Journal of {} resubmitted with {} edit(s)",
                    journal.date,
                    edits.len()
                ));
            }
            print_journal_detail(&journal, format);
        }
    }

    Ok(())
}

/// The notification must be this resident's request for this journal
async fn check_notification(
    state: &AppState,
    resident_id: &UserId,
    journal_id: &JournalId,
    notification_id: &NotificationId,
) -> Result<(), AppError> {
    let notification = state
        .notifications
        .notification_by_id(notification_id)
        .await?
        .filter(|n| &n.resident_id == resident_id)
        .ok_or_else(|| AppError::not_found(format!("Notification {notification_id} not found")))?;
    if &notification.journal_id != journal_id {
        return Err(AppError::validation(format!(
            "Notification {notification_id} is not about journal {journal_id}"
        )));
    }
    Ok(())
}
