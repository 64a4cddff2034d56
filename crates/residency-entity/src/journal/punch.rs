//! Punch (clock event) value objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use residency_core::AppError;

use super::time::ClockTime;

/// Kind of clock event recorded inside a normal activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchKind {
    /// Start of the work period.
    Entry,
    /// Start of a break.
    BreakStart,
    /// End of a break.
    BreakEnd,
    /// End of the work period.
    Exit,
}

impl PunchKind {
    /// All punch kinds in workflow order.
    pub const ALL: [PunchKind; 4] = [Self::Entry, Self::BreakStart, Self::BreakEnd, Self::Exit];

    /// Return the kind as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::BreakStart => "break_start",
            Self::BreakEnd => "break_end",
            Self::Exit => "exit",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::BreakStart => "Break start",
            Self::BreakEnd => "Break end",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for PunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PunchKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "entry" => Ok(Self::Entry),
            "break_start" => Ok(Self::BreakStart),
            "break_end" => Ok(Self::BreakEnd),
            "exit" => Ok(Self::Exit),
            _ => Err(AppError::validation(format!(
                "Invalid punch kind: '{s}'. Expected one of: entry, break_start, break_end, exit"
            ))),
        }
    }
}

/// A single timestamped clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punch {
    /// Local clock time of the event.
    pub time: ClockTime,
    /// What the event marks.
    pub kind: PunchKind,
}

impl Punch {
    /// Create a punch.
    pub fn new(time: ClockTime, kind: PunchKind) -> Self {
        Self { time, kind }
    }
}
