use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a stored trip ends: on a recorded date, or still open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "date", rename_all = "snake_case")]
pub enum TripEnd {
    Returned(NaiveDate),
    Ongoing,
}

/// One continuous period abroad, as accepted by the validator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trip {
    pub departure: NaiveDate,
    pub end: TripEnd,
}

impl Trip {
    pub fn returned(departure: NaiveDate, return_date: NaiveDate) -> Self {
        Self {
            departure,
            end: TripEnd::Returned(return_date),
        }
    }

    pub fn ongoing(departure: NaiveDate) -> Self {
        Self {
            departure,
            end: TripEnd::Ongoing,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self.end, TripEnd::Ongoing)
    }

    pub fn return_date(&self) -> Option<NaiveDate> {
        match self.end {
            TripEnd::Returned(date) => Some(date),
            TripEnd::Ongoing => None,
        }
    }

    /// Last day of the trip, treating an open trip as ending on `now`.
    pub fn effective_end(&self, now: NaiveDate) -> NaiveDate {
        self.return_date().unwrap_or(now)
    }

    /// Closes an open trip on `on`; a trip that already returned is left as is.
    pub fn closed_on(&self, on: NaiveDate) -> Self {
        match self.end {
            TripEnd::Ongoing => Self::returned(self.departure, on),
            TripEnd::Returned(_) => *self,
        }
    }
}

/// Unvalidated trip input as supplied by a caller or read from a trip file.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripDraft {
    #[serde(default)]
    pub departure: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub ongoing: bool,
}

impl TripDraft {
    pub fn returned(departure: NaiveDate, return_date: NaiveDate) -> Self {
        Self {
            departure: Some(departure),
            return_date: Some(return_date),
            ongoing: false,
        }
    }

    pub fn ongoing(departure: NaiveDate) -> Self {
        Self {
            departure: Some(departure),
            return_date: None,
            ongoing: true,
        }
    }

    /// An ongoing draft carries no return date, whatever the caller typed.
    pub fn normalized(&self) -> Self {
        if self.ongoing {
            Self {
                return_date: None,
                ..*self
            }
        } else {
            *self
        }
    }
}
