//! The journal manager: recording, review lifecycle, and queries.

pub mod input;
pub mod queries;
pub mod sequencing;
pub mod service;
pub mod sessions;

pub use input::{ActivityInput, JournalScope, PunchEdit, ReviewDecision};
pub use queries::ReviewedJournal;
pub use sequencing::PunchState;
pub use service::JournalService;
pub use sessions::{DaySummary, WorkSession, WorkedTime, day_summary, reconstruct_sessions};

#[cfg(test)]
pub(crate) mod fixture;
