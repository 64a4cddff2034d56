//! Day activity registration.

use clap::{Args, ValueEnum};

use residency_core::AppError;
use residency_entity::journal::DayActivityKind;
use residency_entity::user::UserRole;
use residency_service::ActivityInput;

use crate::output::{self, OutputFormat};
use crate::state::AppState;

/// Activity types accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActivityKindArg {
    /// Theory class
    TheoryClass,
    /// Medical certificate
    MedicalCertificate,
    /// Authorized event
    AuthorizedEvent,
}

impl From<ActivityKindArg> for DayActivityKind {
    fn from(arg: ActivityKindArg) -> Self {
        match arg {
            ActivityKindArg::TheoryClass => Self::TheoryClass,
            ActivityKindArg::MedicalCertificate => Self::MedicalCertificate,
            ActivityKindArg::AuthorizedEvent => Self::AuthorizedEvent,
        }
    }
}

/// Arguments for the activity command
#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// Activity type
    #[arg(value_enum)]
    pub kind: ActivityKindArg,
    /// Covers the morning
    #[arg(long)]
    pub morning: bool,
    /// Covers the afternoon
    #[arg(long)]
    pub afternoon: bool,
    /// General justification, stored when the day's journal is created
    #[arg(short, long)]
    pub justification: Option<String>,
}

/// Execute the activity command
pub async fn execute(
    args: &ActivityArgs,
    state: &AppState,
    as_user: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = state.actor_with_role(as_user, UserRole::Resident).await?;
    let kind = DayActivityKind::from(args.kind);
    let input = ActivityInput::day_with_periods(kind, args.morning, args.afternoon);

    let journal = state
        .journals
        .record_punch_or_activity(&ctx.user_id, input, args.justification.clone())
        .await?;

    output::print_item(&journal, format, |j| {
        output::print_success(&format!("{} registered for {}", kind.label(), j.date));
    });
    Ok(())
}
