//! Resident history commands.

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use residency_core::AppError;
use residency_core::types::id::JournalId;
use residency_entity::journal::{Journal, MonthKey};
use residency_entity::user::UserRole;
use residency_service::JournalScope;

use super::views::{JournalRow, print_journal_detail};
use crate::output::{self, OutputFormat};
use crate::state::AppState;

/// Arguments for journal commands
#[derive(Debug, Args)]
pub struct JournalArgs {
    /// Journal subcommand
    #[command(subcommand)]
    pub command: JournalCommand,
}

/// Which journals to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Every journal
    All,
    /// Pending review
    Queue,
    /// Already reviewed
    History,
}

impl From<ScopeArg> for JournalScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::All => Self::All,
            ScopeArg::Queue => Self::Queue,
            ScopeArg::History => Self::History,
        }
    }
}

/// Journal subcommands
#[derive(Debug, Subcommand)]
pub enum JournalCommand {
    /// List your journals, newest first
    List {
        /// Status scope
        #[arg(short, long, value_enum, default_value = "all")]
        scope: ScopeArg,
        /// Only journals of this month (MM/YYYY)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Months you have journals in
    Months,
    /// Show one journal with its work sessions
    Show {
        /// Journal ID
        id: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct MonthRow {
    month: String,
}

/// Execute journal commands
pub async fn execute(
    args: &JournalArgs,
    state: &AppState,
    as_user: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = state.actor_with_role(as_user, UserRole::Resident).await?;

    match &args.command {
        JournalCommand::List { scope, month } => {
            let scope = JournalScope::from(*scope);
            let journals: Vec<Journal> = match month {
                Some(raw) => {
                    let month: MonthKey = raw.parse()?;
                    state
                        .journals
                        .journals_for_month(&ctx.user_id, month)
                        .await?
                        .into_iter()
                        .filter(|j| scope.includes(j.status))
                        .collect()
                }
                None => {
                    state
                        .journals
                        .journals_for_resident(&ctx.user_id, scope)
                        .await?
                }
            };
            let rows: Vec<JournalRow> = journals.iter().map(JournalRow::from).collect();
            output::print_list(&rows, format);
        }
        JournalCommand::Months => {
            let rows: Vec<MonthRow> = state
                .journals
                .available_months(&ctx.user_id)
                .await?
                .iter()
                .map(|m| MonthRow {
                    month: m.to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        JournalCommand::Show { id } => {
            let id: JournalId = super::parse_id(id, "journal")?;
            let journal = state
                .journals
                .journal_by_id(&id)
                .await?
                .filter(|j| j.resident_id == ctx.user_id)
                .ok_or_else(|| AppError::not_found(format!("Journal {id} not found")))?;
            print_journal_detail(&journal, format);
        }
    }

    Ok(())
}
