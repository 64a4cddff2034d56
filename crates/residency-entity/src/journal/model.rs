//! Journal record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use residency_core::traits::Record;
use residency_core::types::id::{JournalId, UserId};

use super::activity::{Activity, DayActivityKind};
use super::punch::{Punch, PunchKind};
use super::status::JournalStatus;
use super::time::{ClockTime, JournalDate};

/// One resident's attendance record for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    /// Unique journal identifier.
    pub id: JournalId,
    /// Owning resident.
    pub resident_id: UserId,
    /// Calendar day; unique together with `resident_id`.
    pub date: JournalDate,
    /// Approval state.
    #[serde(default)]
    pub status: JournalStatus,
    /// Free-text note supplied by the resident.
    #[serde(default)]
    pub general_justification: Option<String>,
    /// Normal and day activities in insertion order.
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Preceptor who last moved the status away from pending.
    #[serde(default)]
    pub validator_id: Option<UserId>,
    /// When the status last changed.
    #[serde(default)]
    pub validation_date: Option<NaiveDateTime>,
    /// Note left by the validator.
    #[serde(default)]
    pub validator_note: Option<String>,
}

impl Journal {
    /// Create an empty pending journal.
    pub fn new(resident_id: UserId, date: JournalDate, justification: Option<String>) -> Self {
        Self {
            id: JournalId::new(),
            resident_id,
            date,
            status: JournalStatus::Pending,
            general_justification: justification.filter(|j| !j.trim().is_empty()),
            activities: Vec::new(),
            validator_id: None,
            validation_date: None,
            validator_note: None,
        }
    }

    /// Punches of the normal activity, empty when there is none.
    pub fn normal_punches(&self) -> &[Punch] {
        self.activities
            .iter()
            .find(|a| a.is_normal())
            .map(Activity::punches)
            .unwrap_or(&[])
    }

    /// Mutable access to the normal activity's punches, if it exists.
    pub fn normal_punches_mut(&mut self) -> Option<&mut Vec<Punch>> {
        self.activities.iter_mut().find_map(|a| match a {
            Activity::Normal { punches } => Some(punches),
            _ => None,
        })
    }

    /// Append a punch to the normal activity, creating it on first use.
    pub fn push_punch(&mut self, punch: Punch) {
        match self.normal_punches_mut() {
            Some(punches) => punches.push(punch),
            None => self.activities.push(Activity::Normal {
                punches: vec![punch],
            }),
        }
    }

    /// Set the detail of the day activity of `kind`, appending it when absent.
    pub fn upsert_day_activity(&mut self, kind: DayActivityKind, detail: impl Into<String>) {
        let detail = detail.into();
        match self
            .activities
            .iter_mut()
            .find(|a| a.day_kind() == Some(kind))
        {
            Some(existing) => existing.set_detail(detail),
            None => self.activities.push(Activity::day(kind, detail)),
        }
    }

    /// Day activities (everything except the normal entry).
    pub fn day_activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(|a| !a.is_normal())
    }

    /// Time of the first punch of `kind`.
    pub fn first_punch_time(&self, kind: PunchKind) -> Option<ClockTime> {
        self.normal_punches()
            .iter()
            .find(|p| p.kind == kind)
            .map(|p| p.time)
    }
}

impl Record for Journal {
    type Id = JournalId;
    const COLLECTION: &'static str = "journals";

    fn id(&self) -> &JournalId {
        &self.id
    }
}
