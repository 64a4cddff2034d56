//! Caller-supplied inputs to the journal workflow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use residency_core::AppError;
use residency_entity::journal::{ClockTime, DayActivityKind, JournalStatus, PunchKind};

/// What the resident is registering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityInput {
    /// A clock punch stamped with the current time.
    Punch(PunchKind),
    /// A day activity with its detail text.
    Day {
        /// Activity type.
        kind: DayActivityKind,
        /// Detail, e.g. which half-days.
        detail: String,
    },
}

impl ActivityInput {
    /// A day activity registered by half-day period.
    ///
    /// The detail lists the chosen periods (`"Morning, Afternoon"`), or
    /// `"Not specified"` when none was chosen. Medical certificates carry
    /// no period and get an empty detail.
    pub fn day_with_periods(kind: DayActivityKind, morning: bool, afternoon: bool) -> Self {
        let detail = if kind.uses_periods() {
            let periods: Vec<&str> = [(morning, "Morning"), (afternoon, "Afternoon")]
                .into_iter()
                .filter_map(|(chosen, label)| chosen.then_some(label))
                .collect();
            if periods.is_empty() {
                "Not specified".to_string()
            } else {
                periods.join(", ")
            }
        } else {
            String::new()
        };
        Self::Day { kind, detail }
    }
}

/// A validator's verdict on a journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// Accept the journal.
    Approve,
    /// Refuse the journal.
    Reject,
    /// Send the journal back to the resident.
    RequestCorrection,
}

impl ReviewDecision {
    /// Status the journal moves to.
    pub fn target_status(&self) -> JournalStatus {
        match self {
            Self::Approve => JournalStatus::Approved,
            Self::Reject => JournalStatus::Rejected,
            Self::RequestCorrection => JournalStatus::CorrectionRequested,
        }
    }
}

impl fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::RequestCorrection => "request_correction",
        };
        write!(f, "{s}")
    }
}

/// Replacement time for the punch at `index` of the normal activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEdit {
    /// Zero-based punch position.
    pub index: usize,
    /// New clock time.
    pub time: ClockTime,
}

impl FromStr for PunchEdit {
    type Err = AppError;

    /// Parse `IDX=HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, time) = s.split_once('=').ok_or_else(|| {
            AppError::validation(format!("Invalid punch edit '{s}', expected IDX=HH:MM"))
        })?;
        let index = index.trim().parse().map_err(|_| {
            AppError::validation(format!("Invalid punch index '{index}' in '{s}'"))
        })?;
        Ok(Self {
            index,
            time: time.parse()?,
        })
    }
}

/// Which of a resident's journals to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalScope {
    /// Every journal.
    #[default]
    All,
    /// Journals still pending review.
    Queue,
    /// Journals that left the pending state.
    History,
}

impl JournalScope {
    /// Whether a journal with `status` belongs to this scope.
    pub fn includes(&self, status: JournalStatus) -> bool {
        match self {
            Self::All => true,
            Self::Queue => status.is_pending(),
            Self::History => !status.is_pending(),
        }
    }
}

impl FromStr for JournalScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "queue" => Ok(Self::Queue),
            "history" => Ok(Self::History),
            _ => Err(AppError::validation(format!(
                "Invalid scope: '{s}'. Expected one of: all, queue, history"
            ))),
        }
    }
}
