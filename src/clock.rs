use chrono::{Local, NaiveDate};

/// Clock abstracts access to today's date so callers can pin `now` in tests.
///
/// The engine itself never reads a clock; it only accepts `now` as a parameter.
pub trait Clock: Send + Sync {
    /// Returns the current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
