//! Local wall-clock abstraction.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Supplies the current local date and time for stamping punches and
/// validations.
pub trait Clock: Send + Sync + std::fmt::Debug + 'static {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current local time of day.
    fn time_of_day(&self) -> NaiveTime {
        self.now().time()
    }
}
