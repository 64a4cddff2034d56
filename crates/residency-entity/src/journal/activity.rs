//! Activity entries recorded inside a journal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use residency_core::AppError;

use super::punch::Punch;

/// Activities that occupy part or all of a day without clock punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayActivityKind {
    /// Theory class.
    TheoryClass,
    /// Medical leave backed by a certificate.
    MedicalCertificate,
    /// Event authorized by the program.
    AuthorizedEvent,
}

impl DayActivityKind {
    /// Return the kind as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TheoryClass => "theory_class",
            Self::MedicalCertificate => "medical_certificate",
            Self::AuthorizedEvent => "authorized_event",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TheoryClass => "Theory class",
            Self::MedicalCertificate => "Medical certificate",
            Self::AuthorizedEvent => "Authorized event",
        }
    }

    /// Whether the activity is registered per half-day period.
    pub fn uses_periods(&self) -> bool {
        matches!(self, Self::TheoryClass | Self::AuthorizedEvent)
    }
}

impl fmt::Display for DayActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DayActivityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "theory_class" => Ok(Self::TheoryClass),
            "medical_certificate" => Ok(Self::MedicalCertificate),
            "authorized_event" => Ok(Self::AuthorizedEvent),
            _ => Err(AppError::validation(format!(
                "Invalid activity type: '{s}'. Expected one of: theory_class, medical_certificate, authorized_event"
            ))),
        }
    }
}

/// One entry in a journal's activity list.
///
/// Serialized with a `type` discriminant: `normal` entries carry the
/// ordered `punches`, day activities carry a free-text `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Activity {
    /// Clock-based work period.
    Normal {
        /// Punches in the order they were recorded.
        #[serde(default)]
        punches: Vec<Punch>,
    },
    /// Theory class.
    TheoryClass {
        /// Which half-days, e.g. `"Morning, Afternoon"`.
        #[serde(default)]
        detail: String,
    },
    /// Medical certificate.
    MedicalCertificate {
        /// Free-text detail.
        #[serde(default)]
        detail: String,
    },
    /// Authorized event.
    AuthorizedEvent {
        /// Which half-days.
        #[serde(default)]
        detail: String,
    },
}

impl Activity {
    /// A day activity of the given kind.
    pub fn day(kind: DayActivityKind, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match kind {
            DayActivityKind::TheoryClass => Self::TheoryClass { detail },
            DayActivityKind::MedicalCertificate => Self::MedicalCertificate { detail },
            DayActivityKind::AuthorizedEvent => Self::AuthorizedEvent { detail },
        }
    }

    /// The day-activity kind, or `None` for the normal activity.
    pub fn day_kind(&self) -> Option<DayActivityKind> {
        match self {
            Self::Normal { .. } => None,
            Self::TheoryClass { .. } => Some(DayActivityKind::TheoryClass),
            Self::MedicalCertificate { .. } => Some(DayActivityKind::MedicalCertificate),
            Self::AuthorizedEvent { .. } => Some(DayActivityKind::AuthorizedEvent),
        }
    }

    /// Whether this is the clock-based normal activity.
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal { .. })
    }

    /// The `type` discriminant as stored.
    pub fn type_str(&self) -> &'static str {
        self.day_kind().map_or("normal", |k| k.as_str())
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        self.day_kind().map_or("Normal", |k| k.label())
    }

    /// Punches of a normal activity; empty for day activities.
    pub fn punches(&self) -> &[Punch] {
        match self {
            Self::Normal { punches } => punches,
            _ => &[],
        }
    }

    /// Detail text of a day activity.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Normal { .. } => None,
            Self::TheoryClass { detail }
            | Self::MedicalCertificate { detail }
            | Self::AuthorizedEvent { detail } => Some(detail),
        }
    }

    /// Overwrite the detail of a day activity. No-op for the normal activity.
    pub fn set_detail(&mut self, value: impl Into<String>) {
        match self {
            Self::Normal { .. } => {}
            Self::TheoryClass { detail }
            | Self::MedicalCertificate { detail }
            | Self::AuthorizedEvent { detail } => *detail = value.into(),
        }
    }
}
