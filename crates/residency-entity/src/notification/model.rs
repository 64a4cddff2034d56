//! Notification record.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use residency_core::AppError;
use residency_core::traits::Record;
use residency_core::types::id::{JournalId, NotificationId, UserId};

use crate::journal::JournalDate;

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// A validator sent a journal back for correction.
    CorrectionRequest,
}

impl NotificationType {
    /// Return the type as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CorrectionRequest => "correction_request",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    /// Not yet acted upon.
    Unread,
    /// Seen or resolved.
    Read,
}

impl NotificationStatus {
    /// Return the status as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
        }
    }
}

impl Default for NotificationStatus {
    fn default() -> Self {
        Self::Unread
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unread" => Ok(Self::Unread),
            "read" => Ok(Self::Read),
            _ => Err(AppError::validation(format!(
                "Invalid notification status: '{s}'. Expected one of: unread, read"
            ))),
        }
    }
}

/// A message addressed to a resident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Recipient.
    pub resident_id: UserId,
    /// Trigger.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Journal the notification refers to.
    pub journal_id: JournalId,
    /// Text shown to the resident.
    pub message: String,
    /// Read state.
    #[serde(default)]
    pub status: NotificationStatus,
    /// When the notification was created.
    pub created_at: NaiveDateTime,
}

impl Notification {
    /// Build an unread correction request for the journal of `date`.
    pub fn correction_request(
        resident_id: UserId,
        journal_id: JournalId,
        date: JournalDate,
        note: &str,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            resident_id,
            kind: NotificationType::CorrectionRequest,
            journal_id,
            message: format!("Correction requested for the journal of {date}. Reason: {note}"),
            status: NotificationStatus::Unread,
            created_at,
        }
    }

    /// Whether the notification has not been read.
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }
}

impl Record for Notification {
    type Id = NotificationId;
    const COLLECTION: &'static str = "notifications";

    fn id(&self) -> &NotificationId {
        &self.id
    }
}
