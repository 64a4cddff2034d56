//! Reconstruction of work sessions from a day's raw punches.
//!
//! A session opens at an `entry` and closes at the next `exit`. Breaks are
//! collected in between. Punches outside an open session are ignored, and a
//! new `entry` closes any session still open without an exit.

use std::fmt;

use serde::{Serialize, Serializer};

use residency_entity::journal::{
    Activity, ClockTime, Journal, JournalDate, JournalStatus, Punch, PunchKind, MINUTES_PER_DAY,
};

/// A break inside a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakSpan {
    /// When the break started.
    pub start: ClockTime,
    /// When it ended; `None` while open.
    pub end: Option<ClockTime>,
}

/// One entry-to-exit stretch of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkSession {
    /// Entry time.
    pub entry: ClockTime,
    /// Breaks in the order they started.
    pub breaks: Vec<BreakSpan>,
    /// Exit time; `None` for an open session.
    pub exit: Option<ClockTime>,
    /// Net worked time.
    pub worked: WorkedTime,
}

/// Net worked time of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkedTime {
    /// Net minutes worked.
    Minutes(u32),
    /// The session has no exit yet.
    Pending,
    /// Breaks exceed the session length.
    Invalid,
}

impl WorkedTime {
    /// Net minutes, when computable.
    pub fn minutes(&self) -> Option<u32> {
        match self {
            Self::Minutes(m) => Some(*m),
            Self::Pending | Self::Invalid => None,
        }
    }
}

impl fmt::Display for WorkedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(m) => write!(f, "{}h {}m", m / 60, m % 60),
            Self::Pending => write!(f, "pending calculation"),
            Self::Invalid => write!(f, "calculation error"),
        }
    }
}

impl Serialize for WorkedTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl WorkSession {
    fn open(entry: ClockTime) -> Self {
        Self {
            entry,
            breaks: Vec::new(),
            exit: None,
            worked: WorkedTime::Pending,
        }
    }

    fn close(mut self) -> Self {
        self.worked = compute_worked(&self);
        self
    }
}

/// Exit earlier than entry counts as the next day. Breaks get no such
/// allowance and are subtracted as recorded.
fn compute_worked(session: &WorkSession) -> WorkedTime {
    let Some(exit) = session.exit else {
        return WorkedTime::Pending;
    };
    let entry = i64::from(session.entry.minutes_since_midnight());
    let mut exit = i64::from(exit.minutes_since_midnight());
    if exit < entry {
        exit += i64::from(MINUTES_PER_DAY);
    }

    let breaks: i64 = session
        .breaks
        .iter()
        .filter_map(|b| {
            b.end.map(|end| {
                i64::from(end.minutes_since_midnight()) - i64::from(b.start.minutes_since_midnight())
            })
        })
        .sum();

    let net = exit - entry - breaks;
    match u32::try_from(net) {
        Ok(minutes) => WorkedTime::Minutes(minutes),
        Err(_) => WorkedTime::Invalid,
    }
}

/// Group `punches` into sessions in recorded order.
pub fn reconstruct_sessions(punches: &[Punch]) -> Vec<WorkSession> {
    let mut sessions = Vec::new();
    let mut current: Option<WorkSession> = None;

    for punch in punches {
        match punch.kind {
            PunchKind::Entry => {
                if let Some(open) = current.take() {
                    sessions.push(open.close());
                }
                current = Some(WorkSession::open(punch.time));
            }
            PunchKind::BreakStart => {
                if let Some(open) = current.as_mut() {
                    open.breaks.push(BreakSpan {
                        start: punch.time,
                        end: None,
                    });
                }
            }
            PunchKind::BreakEnd => {
                if let Some(last) = current.as_mut().and_then(|s| s.breaks.last_mut()) {
                    if last.end.is_none() {
                        last.end = Some(punch.time);
                    }
                }
            }
            PunchKind::Exit => {
                if let Some(mut open) = current.take() {
                    open.exit = Some(punch.time);
                    sessions.push(open.close());
                }
            }
        }
    }

    if let Some(open) = current {
        sessions.push(open.close());
    }
    sessions
}

/// Everything shown for one journal's day.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    /// The day.
    pub date: JournalDate,
    /// Approval state.
    pub status: JournalStatus,
    /// Reconstructed sessions.
    pub sessions: Vec<WorkSession>,
    /// Day activities in recorded order.
    pub day_activities: Vec<Activity>,
    /// Sum of the sessions whose worked time is computable.
    pub total_minutes: u32,
}

/// Build the display summary of `journal`.
pub fn day_summary(journal: &Journal) -> DaySummary {
    let sessions = reconstruct_sessions(journal.normal_punches());
    let total_minutes = sessions.iter().filter_map(|s| s.worked.minutes()).sum();
    DaySummary {
        date: journal.date,
        status: journal.status,
        sessions,
        day_activities: journal.day_activities().cloned().collect(),
        total_minutes,
    }
}
