//! Punch sequencing policy for the normal activity.

use serde::Serialize;

use residency_core::AppError;
use residency_entity::journal::{ClockTime, Punch, PunchKind};

/// Where the resident stands in the day, derived from the last punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchState {
    /// No punch recorded today.
    NotStarted,
    /// Last punch was an entry or a break end.
    ClockedIn,
    /// Last punch was a break start.
    OnBreak,
    /// Last punch was an exit.
    Finished,
}

impl PunchState {
    /// State after `punches`.
    pub fn from_punches(punches: &[Punch]) -> Self {
        match punches.last().map(|p| p.kind) {
            None => Self::NotStarted,
            Some(PunchKind::Entry | PunchKind::BreakEnd) => Self::ClockedIn,
            Some(PunchKind::BreakStart) => Self::OnBreak,
            Some(PunchKind::Exit) => Self::Finished,
        }
    }

    /// Punch kinds offered from this state.
    pub fn allowed(&self) -> &'static [PunchKind] {
        match self {
            Self::NotStarted | Self::Finished => &[PunchKind::Entry],
            Self::ClockedIn => &[PunchKind::BreakStart, PunchKind::Exit],
            Self::OnBreak => &[PunchKind::BreakEnd],
        }
    }

    /// Whether `kind` is offered from this state.
    pub fn permits(&self, kind: PunchKind) -> bool {
        self.allowed().contains(&kind)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::ClockedIn => "Clocked in",
            Self::OnBreak => "On break",
            Self::Finished => "Finished",
        }
    }
}

/// Check that a `kind` punch at `time` may follow `punches`.
///
/// An exit must be later than the most recent entry and a break end later
/// than the break start it closes. Other kinds carry no time rule.
pub fn check_punch_time(punches: &[Punch], kind: PunchKind, time: ClockTime) -> Result<(), AppError> {
    match kind {
        PunchKind::Exit => {
            let last_entry = punches.iter().rev().find(|p| p.kind == PunchKind::Entry);
            if let Some(entry) = last_entry {
                if time <= entry.time {
                    return Err(AppError::validation(format!(
                        "Exit at {time} must be later than the entry at {}",
                        entry.time
                    )));
                }
            }
        }
        PunchKind::BreakEnd => {
            if let Some(start) = open_break_start(punches) {
                if time <= start {
                    return Err(AppError::validation(format!(
                        "Break end at {time} must be later than the break start at {start}"
                    )));
                }
            }
        }
        PunchKind::Entry | PunchKind::BreakStart => {}
    }
    Ok(())
}

fn open_break_start(punches: &[Punch]) -> Option<ClockTime> {
    let mut open = None;
    for punch in punches {
        match punch.kind {
            PunchKind::BreakStart => open = Some(punch.time),
            PunchKind::BreakEnd => open = None,
            PunchKind::Entry | PunchKind::Exit => {}
        }
    }
    open
}
