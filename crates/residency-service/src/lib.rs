//! # residency-service
//!
//! Business logic for the residency journal system. The centre of the
//! crate is [`JournalService`], which records punches and day activities
//! into daily journals and drives their approval lifecycle.
//!
//! Services follow constructor injection: every dependency is provided at
//! construction time via `Arc` references.

pub mod clock;
pub mod context;
pub mod identity;
pub mod journal;
pub mod notification;

pub use clock::{FixedClock, SystemClock};
pub use context::RequestContext;
pub use identity::{IdentityService, SupervisionService};
pub use journal::{
    ActivityInput, JournalScope, JournalService, PunchEdit, PunchState, ReviewDecision,
    ReviewedJournal,
};
pub use notification::{NotificationService, NotificationSink};
