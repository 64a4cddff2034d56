//! Clock-in screen commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use residency_core::AppError;
use residency_core::types::id::UserId;
use residency_entity::journal::PunchKind;
use residency_entity::user::UserRole;
use residency_service::{ActivityInput, PunchState};

use crate::output::{self, OutputFormat, time_or_placeholder};
use crate::state::AppState;

/// Arguments for punch commands
#[derive(Debug, Args)]
pub struct PunchArgs {
    /// Punch subcommand
    #[command(subcommand)]
    pub command: PunchCommand,
}

/// Optional general justification
#[derive(Debug, Args)]
pub struct Justification {
    /// General justification, stored when the day's journal is created
    #[arg(short, long)]
    pub justification: Option<String>,
}

/// Punch subcommands
#[derive(Debug, Subcommand)]
pub enum PunchCommand {
    /// Start the work period
    Entry(Justification),
    /// Start a break
    BreakStart(Justification),
    /// End a break
    BreakEnd(Justification),
    /// End the work period
    Exit(Justification),
    /// Show today's state and the punches on offer
    Status,
}

#[derive(Debug, Serialize)]
struct StatusView {
    date: String,
    state: PunchState,
    allowed: Vec<PunchKind>,
    entry: String,
    exit: String,
}

/// Execute punch commands
pub async fn execute(
    args: &PunchArgs,
    state: &AppState,
    as_user: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = state.actor_with_role(as_user, UserRole::Resident).await?;

    let (kind, justification) = match &args.command {
        PunchCommand::Entry(j) => (PunchKind::Entry, j),
        PunchCommand::BreakStart(j) => (PunchKind::BreakStart, j),
        PunchCommand::BreakEnd(j) => (PunchKind::BreakEnd, j),
        PunchCommand::Exit(j) => (PunchKind::Exit, j),
        PunchCommand::Status => return print_status(state, &ctx.user_id, format).await,
    };

    let journal = state
        .journals
        .record_punch_or_activity(
            &ctx.user_id,
            ActivityInput::Punch(kind),
            justification.justification.clone(),
        )
        .await?;

    let recorded = journal
        .normal_punches()
        .last()
        .map(|p| p.time.to_string())
        .unwrap_or_default();
    output::print_item(&journal, format, |_| {
        output::print_success(&format!("{} recorded at {recorded}", kind.label()));
    });
    Ok(())
}

async fn print_status(
    state: &AppState,
    resident_id: &UserId,
    format: OutputFormat,
) -> Result<(), AppError> {
    let today = state.journals.today_journal(resident_id).await?;
    let punch_state = state.journals.punch_state(resident_id).await?;
    let view = StatusView {
        date: state.journals.today().to_string(),
        state: punch_state,
        allowed: punch_state.allowed().to_vec(),
        entry: time_or_placeholder(today.as_ref().and_then(|j| j.first_punch_time(PunchKind::Entry))),
        exit: time_or_placeholder(today.as_ref().and_then(|j| j.first_punch_time(PunchKind::Exit))),
    };
    output::print_item(&view, format, |v| {
        output::print_kv("Date", &v.date);
        output::print_kv("State", punch_state.label());
        output::print_kv("Entry", &v.entry);
        output::print_kv("Exit", &v.exit);
        output::print_kv(
            "Next",
            &v.allowed
                .iter()
                .map(|k| k.as_str().replace('_', "-"))
                .collect::<Vec<_>>()
                .join(" | "),
        );
    });
    Ok(())
}
