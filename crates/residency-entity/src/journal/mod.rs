//! Daily journals and the values they are made of.

pub mod activity;
pub mod model;
pub mod punch;
pub mod status;
pub mod time;

pub use activity::{Activity, DayActivityKind};
pub use model::Journal;
pub use punch::{Punch, PunchKind};
pub use status::JournalStatus;
pub use time::{ClockTime, JournalDate, MINUTES_PER_DAY, MonthKey};
