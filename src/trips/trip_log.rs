use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{ResidencyError, ResidencyResult, ValidationError};

use super::{close_ongoing_trip, validate_new_trip, Trip, TripDraft};

/// Append-only collection of accepted trips.
///
/// Every mutation returns a new log; the receiver is never modified, so a
/// reader holding the previous log keeps a consistent view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripLog {
    trips: Vec<Trip>,
}

impl TripLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays drafts in order, failing on the first one the validator rejects.
    pub fn from_drafts(drafts: &[TripDraft], now: NaiveDate) -> ResidencyResult<Self> {
        let mut log = Self::new();
        for (index, draft) in drafts.iter().enumerate() {
            log = log
                .add_trip(draft, now)
                .map_err(|source| ResidencyError::RejectedTrip { index, source })?;
        }
        info!(count = log.len(), "trip log loaded");
        Ok(log)
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn ongoing_index(&self) -> Option<usize> {
        self.trips.iter().position(Trip::is_ongoing)
    }

    pub fn add_trip(&self, draft: &TripDraft, now: NaiveDate) -> Result<Self, ValidationError> {
        let trip = validate_new_trip(&self.trips, draft, now)?;
        let mut trips = self.trips.clone();
        trips.push(trip);
        debug!(departure = %trip.departure, ongoing = trip.is_ongoing(), "trip added");
        Ok(Self { trips })
    }

    pub fn close_ongoing_trip(&self, index: usize, now: NaiveDate) -> Self {
        Self {
            trips: close_ongoing_trip(&self.trips, index, now),
        }
    }

    /// Earliest departure date a new trip can use after the latest stored trip.
    ///
    /// Returns `None` when no such date exists yet: the log holds an ongoing
    /// trip, or the day after the latest trip is still in the future. An empty
    /// log also yields `None`, meaning any past date is acceptable.
    pub fn earliest_departure(&self, now: NaiveDate) -> Option<NaiveDate> {
        if self.ongoing_index().is_some() {
            return None;
        }
        self.trips
            .iter()
            .map(|trip| trip.effective_end(now))
            .max()
            .and_then(|last| last.checked_add_signed(Duration::days(1)))
            .filter(|candidate| *candidate <= now)
    }
}

impl From<Vec<Trip>> for TripLog {
    fn from(trips: Vec<Trip>) -> Self {
        Self { trips }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_trip_leaves_original_log_untouched() {
        let now = date(2024, 6, 1);
        let empty = TripLog::new();
        let one = empty
            .add_trip(&TripDraft::returned(date(2024, 4, 1), date(2024, 4, 10)), now)
            .unwrap();
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn earliest_departure_follows_latest_trip() {
        let now = date(2024, 6, 1);
        let log = TripLog::from(vec![
            Trip::returned(date(2024, 5, 1), date(2024, 5, 10)),
            Trip::returned(date(2024, 4, 1), date(2024, 4, 3)),
        ]);
        let earliest = log.earliest_departure(now);
        assert_eq!(earliest, Some(date(2024, 5, 11)));
        assert!(log
            .add_trip(&TripDraft::returned(date(2024, 5, 11), date(2024, 5, 11)), now)
            .is_ok());
        assert_eq!(TripLog::new().earliest_departure(now), None);
    }

    #[test]
    fn earliest_departure_is_withheld_while_a_trip_is_open() {
        let now = date(2024, 6, 10);
        let open = TripLog::from(vec![Trip::ongoing(date(2024, 6, 1))]);
        assert_eq!(open.earliest_departure(now), None);
        assert_eq!(
            open.add_trip(&TripDraft::ongoing(date(2024, 6, 11)), now),
            Err(ValidationError::OngoingConflict)
        );
    }

    #[test]
    fn earliest_departure_is_never_in_the_future() {
        let now = date(2024, 6, 10);
        let returned_today = TripLog::from(vec![Trip::returned(date(2024, 6, 1), now)]);
        assert_eq!(returned_today.earliest_departure(now), None);

        let returned_yesterday =
            TripLog::from(vec![Trip::returned(date(2024, 6, 1), date(2024, 6, 9))]);
        assert_eq!(returned_yesterday.earliest_departure(now), Some(now));
        assert!(returned_yesterday.add_trip(&TripDraft::ongoing(now), now).is_ok());
    }

    #[test]
    fn from_drafts_reports_rejected_index() {
        let now = date(2024, 6, 1);
        let drafts = [
            TripDraft::returned(date(2024, 5, 1), date(2024, 5, 10)),
            TripDraft::returned(date(2024, 5, 5), date(2024, 5, 6)),
        ];
        match TripLog::from_drafts(&drafts, now) {
            Err(ResidencyError::RejectedTrip { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, ValidationError::OverlapDetected);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn ongoing_index_tracks_open_trip() {
        let now = date(2024, 6, 1);
        let log = TripLog::new()
            .add_trip(&TripDraft::returned(date(2024, 4, 1), date(2024, 4, 5)), now)
            .unwrap()
            .add_trip(&TripDraft::ongoing(date(2024, 5, 1)), now)
            .unwrap();
        assert_eq!(log.ongoing_index(), Some(1));
        assert_eq!(log.close_ongoing_trip(1, now).ongoing_index(), None);
    }
}
