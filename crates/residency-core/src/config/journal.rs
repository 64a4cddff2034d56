//! Journal workflow configuration.

use serde::{Deserialize, Serialize};

/// Policy switches for the time-journal workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Reject punches the sequencing state machine does not offer
    /// (e.g. `exit` while on break).
    #[serde(default = "default_true")]
    pub enforce_punch_sequence: bool,
    /// Only allow `pending -> approved | rejected | correction_requested`
    /// and `correction_requested -> pending` on resubmission.
    #[serde(default = "default_true")]
    pub strict_transitions: bool,
    /// Note recorded when a correction is requested without one.
    #[serde(default = "default_correction_note")]
    pub default_correction_note: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enforce_punch_sequence: true,
            strict_transitions: true,
            default_correction_note: default_correction_note(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_correction_note() -> String {
    "Correction requested by the preceptor.".to_string()
}
