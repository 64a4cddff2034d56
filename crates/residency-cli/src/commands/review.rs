//! Preceptor review commands.

use clap::{Args, Subcommand};

use residency_core::AppError;
use residency_core::types::id::JournalId;
use residency_entity::user::UserRole;
use residency_service::{RequestContext, ReviewDecision};

use super::views::{ReviewRow, print_journal_detail};
use crate::output::{self, OutputFormat};
use crate::state::AppState;

/// Arguments for review commands
#[derive(Debug, Args)]
pub struct ReviewArgs {
    /// Review subcommand
    #[command(subcommand)]
    pub command: ReviewCommand,
}

/// Review subcommands
#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// Pending journals of your residents
    Pending,
    /// Journals of your residents that were already reviewed
    Done,
    /// Show one journal of a supervised resident
    Show {
        /// Journal ID
        id: String,
    },
    /// Approve a journal
    Approve {
        /// Journal ID
        id: String,
        /// Note for the resident
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Reject a journal
    Reject {
        /// Journal ID
        id: String,
        /// Reason; prompted for when absent
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Send a journal back to the resident for correction
    RequestCorrection {
        /// Journal ID
        id: String,
        /// What needs fixing
        #[arg(short, long)]
        note: Option<String>,
    },
}

/// Execute review commands
pub async fn execute(
    args: &ReviewArgs,
    state: &AppState,
    as_user: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = state.actor_with_role(as_user, UserRole::Preceptor).await?;

    match &args.command {
        ReviewCommand::Pending => {
            let journals = state.journals.pending_for_preceptor(&ctx.user_id).await?;
            let rows: Vec<ReviewRow> = journals.iter().map(ReviewRow::from).collect();
            output::print_list(&rows, format);
        }
        ReviewCommand::Done => {
            let journals = state.journals.reviewed_for_preceptor(&ctx.user_id).await?;
            let rows: Vec<ReviewRow> = journals.iter().map(ReviewRow::from).collect();
            output::print_list(&rows, format);
        }
        ReviewCommand::Show { id } => {
            let id = supervised_journal(state, &ctx, id).await?;
            if let Some(journal) = state.journals.journal_by_id(&id).await? {
                print_journal_detail(&journal, format);
            }
        }
        ReviewCommand::Approve { id, note } => {
            decide(state, &ctx, id, ReviewDecision::Approve, note.clone(), format).await?;
        }
        ReviewCommand::Reject { id, note } => {
            let note = match note {
                Some(n) => n.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Reason for rejection")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };
            decide(state, &ctx, id, ReviewDecision::Reject, Some(note), format).await?;
        }
        ReviewCommand::RequestCorrection { id, note } => {
            decide(state, &ctx, id, ReviewDecision::RequestCorrection, note.clone(), format)
                .await?;
        }
    }

    Ok(())
}

/// Parse `raw` and check the journal belongs to one of the preceptor's residents
async fn supervised_journal(
    state: &AppState,
    ctx: &RequestContext,
    raw: &str,
) -> Result<JournalId, AppError> {
    let id: JournalId = super::parse_id(raw, "journal")?;
    let journal = state
        .journals
        .journal_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Journal {id} not found")))?;
    let residents = state.supervision.residents_of(&ctx.user_id).await?;
    if !residents.contains(&journal.resident_id) {
        return Err(AppError::authorization(format!(
            "Journal {id} belongs to a resident you do not supervise"
        )));
    }
    Ok(id)
}

async fn decide(
    state: &AppState,
    ctx: &RequestContext,
    raw: &str,
    decision: ReviewDecision,
    note: Option<String>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let id = supervised_journal(state, ctx, raw).await?;
    let journal = state
        .journals
        .set_journal_status(&id, decision, &ctx.user_id, note)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Journal {id} not found")))?;

    output::print_item(&journal, format, |j| {
        output::print_success(&format!(
            "Journal of {} is now {}",
            j.date,
            j.status.label().to_lowercase()
        ));
        if decision == ReviewDecision::RequestCorrection {
            output::print_kv("Resident notified", "yes");
        }
    });
    Ok(())
}
