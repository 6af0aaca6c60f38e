use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::FiscalYearError;

use super::DateWindow;

/// Earliest fiscal year offered to callers picking a year.
pub const FIRST_FISCAL_YEAR: i32 = 1990;

const FISCAL_START_MONTH: u32 = 4;
const FISCAL_END_MONTH: u32 = 3;
const FISCAL_END_DAY: u32 = 31;

/// April-to-March accounting year.
///
/// Only years whose April 1 and following March 31 are both representable
/// calendar dates can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FiscalYear {
    start: NaiveDate,
    end: NaiveDate,
}

impl FiscalYear {
    pub fn new(start_year: i32) -> Result<Self, FiscalYearError> {
        let start = NaiveDate::from_ymd_opt(start_year, FISCAL_START_MONTH, 1);
        let end = start_year
            .checked_add(1)
            .and_then(|year| NaiveDate::from_ymd_opt(year, FISCAL_END_MONTH, FISCAL_END_DAY));
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(FiscalYearError::OutOfRange(start_year)),
        }
    }

    /// Fiscal year that `date` falls in: January to March belong to the previous year's label.
    pub fn containing(date: NaiveDate) -> Result<Self, FiscalYearError> {
        Self::new(fiscal_start_year(date))
    }

    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    pub fn end_year(&self) -> i32 {
        self.end.year()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start, self.end)
    }

    pub fn label(&self) -> String {
        fiscal_year_label(self.start_year())
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_year(), self.end_year())
    }
}

impl FromStr for FiscalYear {
    type Err = FiscalYearError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let invalid = || FiscalYearError::InvalidLabel(label.to_string());
        let trimmed = label.trim();
        // Split on the separator after the first character so a leading sign stays with the year.
        let split_at = trimmed
            .char_indices()
            .skip(1)
            .find(|(_, ch)| *ch == '-')
            .map(|(idx, _)| idx)
            .ok_or_else(invalid)?;
        let (first, second) = (&trimmed[..split_at], &trimmed[split_at + 1..]);
        let start: i32 = first.trim().parse().map_err(|_| invalid())?;
        let end: i32 = second.trim().parse().map_err(|_| invalid())?;
        if start.checked_add(1) != Some(end) {
            return Err(invalid());
        }
        Self::new(start).map_err(|_| invalid())
    }
}

impl TryFrom<String> for FiscalYear {
    type Error = FiscalYearError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FiscalYear> for String {
    fn from(value: FiscalYear) -> Self {
        value.label()
    }
}

fn fiscal_start_year(date: NaiveDate) -> i32 {
    if date.month() < FISCAL_START_MONTH {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Range of start years for which [`FiscalYear::new`] succeeds.
fn representable_start_years() -> (i32, i32) {
    let first = if NaiveDate::MIN.month() <= FISCAL_START_MONTH {
        NaiveDate::MIN.year()
    } else {
        NaiveDate::MIN.year() + 1
    };
    (first, NaiveDate::MAX.year() - 1)
}

/// Formats the label of the fiscal year starting in `year`, e.g. `2024-2025`.
pub fn fiscal_year_label(year: i32) -> String {
    format!("{}-{}", year, i64::from(year) + 1)
}

/// Resolves a label such as `2024-2025` to its April 1 .. March 31 window.
pub fn fiscal_year_window(label: &str) -> Result<DateWindow, FiscalYearError> {
    label.parse::<FiscalYear>().map(|fy| fy.window())
}

pub fn current_fiscal_year_label(today: NaiveDate) -> String {
    fiscal_year_label(fiscal_start_year(today))
}

/// Labels for every fiscal year from `start_year` through `end_year`, ascending.
pub fn enumerate_fiscal_years(start_year: i32, end_year: i32) -> Vec<String> {
    (start_year..=end_year).map(fiscal_year_label).collect()
}

/// Years a caller may pick from: `first_year` up to `forward_buffer` years past
/// today's calendar year.
///
/// Years outside the representable date range are left out.
pub fn selectable_fiscal_years(
    today: NaiveDate,
    first_year: i32,
    forward_buffer: i32,
) -> Vec<FiscalYear> {
    let (min_year, max_year) = representable_start_years();
    let first = first_year.max(min_year);
    let last = today.year().saturating_add(forward_buffer).min(max_year);
    (first..=last)
        .filter_map(|year| FiscalYear::new(year).ok())
        .collect()
}
