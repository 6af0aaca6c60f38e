use chrono::NaiveDate;
use tracing::debug;

use crate::errors::ValidationError;

use super::{Trip, TripDraft};

/// Checks a candidate against the stored trips and returns it as a [`Trip`] when acceptable.
///
/// Checks run in a fixed order and the first failure is returned:
/// missing departure, missing return date, then for each stored trip in order
/// overlap followed by the ongoing-trip conflict, then an inverted range, and
/// finally departure or return dates later than `now`.
///
/// Overlap is inclusive: a trip departing on the day another one returns is
/// rejected.
pub fn validate_new_trip(
    existing: &[Trip],
    candidate: &TripDraft,
    now: NaiveDate,
) -> Result<Trip, ValidationError> {
    let result = check_candidate(existing, &candidate.normalized(), now);
    if let Err(err) = &result {
        debug!(?candidate, ?err, "trip rejected");
    }
    result
}

fn check_candidate(
    existing: &[Trip],
    candidate: &TripDraft,
    now: NaiveDate,
) -> Result<Trip, ValidationError> {
    let departure = candidate
        .departure
        .ok_or(ValidationError::MissingDeparture)?;
    let return_date = if candidate.ongoing {
        None
    } else {
        Some(
            candidate
                .return_date
                .ok_or(ValidationError::MissingReturn)?,
        )
    };

    for trip in existing {
        let overlaps = departure <= trip.effective_end(now)
            && return_date.map_or(true, |ret| ret >= trip.departure);
        if overlaps {
            return Err(ValidationError::OverlapDetected);
        }
        if trip.is_ongoing() && departure >= trip.departure {
            return Err(ValidationError::OngoingConflict);
        }
    }

    if let Some(ret) = return_date {
        if ret < departure {
            return Err(ValidationError::InvertedRange);
        }
    }
    if departure > now {
        return Err(ValidationError::FutureDeparture);
    }

    match return_date {
        Some(ret) if ret > now => Err(ValidationError::FutureReturn),
        Some(ret) => Ok(Trip::returned(departure, ret)),
        None => Ok(Trip::ongoing(departure)),
    }
}

/// Returns a copy of `trips` with the trip at `index` closed on `now`.
///
/// An out-of-range index or a trip that is not ongoing leaves the copy unchanged.
pub fn close_ongoing_trip(trips: &[Trip], index: usize, now: NaiveDate) -> Vec<Trip> {
    let mut updated = trips.to_vec();
    match updated.get_mut(index) {
        Some(trip) if trip.is_ongoing() => {
            *trip = trip.closed_on(now);
            debug!(index, %now, "closed ongoing trip");
        }
        _ => debug!(index, "no ongoing trip to close"),
    }
    updated
}
