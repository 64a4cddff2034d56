//! Journal approval status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use residency_core::AppError;

/// Approval state of a daily journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalStatus {
    /// Awaiting review by a preceptor.
    Pending,
    /// Accepted by the validator.
    Approved,
    /// Refused by the validator.
    Rejected,
    /// Sent back to the resident for correction.
    CorrectionRequested,
}

impl JournalStatus {
    /// Whether the journal is in the review queue.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Return the status as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::CorrectionRequested => "correction_requested",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::CorrectionRequested => "Correction requested",
        }
    }
}

impl Default for JournalStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for JournalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JournalStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "correction_requested" => Ok(Self::CorrectionRequested),
            _ => Err(AppError::validation(format!(
                "Invalid journal status: '{s}'. Expected one of: pending, approved, rejected, correction_requested"
            ))),
        }
    }
}
