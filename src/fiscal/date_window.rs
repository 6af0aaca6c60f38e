use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed calendar window `[start, end]`; both bounds are counted as inside.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Intersects `[from, to]` with this window, returning `None` when they are disjoint.
    pub fn clip(&self, from: NaiveDate, to: NaiveDate) -> Option<DateWindow> {
        let start = from.max(self.start);
        let end = to.min(self.end);
        if start > end {
            None
        } else {
            Some(DateWindow { start, end })
        }
    }

    /// Inclusive day count: a window starting and ending on the same date spans one day.
    pub fn inclusive_days(&self) -> u32 {
        let span = (self.end - self.start).num_days();
        u32::try_from(span + 1).unwrap_or(0)
    }
}
