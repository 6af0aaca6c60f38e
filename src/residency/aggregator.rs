use chrono::NaiveDate;

use crate::errors::FiscalYearError;
use crate::fiscal::FiscalYear;
use crate::trips::Trip;

/// Days needed in a fiscal year to be treated as resident (the 183-day rule).
pub const RESIDENCY_THRESHOLD_DAYS: u32 = 183;

/// Total days counted for `fiscal_year` across all trips.
///
/// Each trip is clipped to the April 1 .. March 31 window and counted
/// inclusively. An ongoing trip that departed today counts exactly one day.
pub fn compute_residency_days(trips: &[Trip], fiscal_year: FiscalYear, now: NaiveDate) -> u32 {
    trips
        .iter()
        .map(|trip| trip_contribution(trip, fiscal_year, now))
        .sum()
}

/// Same as [`compute_residency_days`], resolving the fiscal year from its label.
pub fn compute_residency_days_for_label(
    trips: &[Trip],
    label: &str,
    now: NaiveDate,
) -> Result<u32, FiscalYearError> {
    let fiscal_year = label.parse::<FiscalYear>()?;
    Ok(compute_residency_days(trips, fiscal_year, now))
}

/// Days of a single trip inside `fiscal_year`, without the started-today override.
///
/// This is the per-row figure for trip listings; the aggregate sum is authoritative.
pub fn trip_days_in_year(trip: &Trip, fiscal_year: FiscalYear, now: NaiveDate) -> u32 {
    fiscal_year
        .window()
        .clip(trip.departure, trip.effective_end(now))
        .map_or(0, |clipped| clipped.inclusive_days())
}

fn trip_contribution(trip: &Trip, fiscal_year: FiscalYear, now: NaiveDate) -> u32 {
    let days = trip_days_in_year(trip, fiscal_year, now);
    if days == 0 {
        return 0;
    }
    let started_today =
        trip.is_ongoing() && fiscal_year.window().contains(trip.departure) && trip.departure == now;
    if started_today {
        1
    } else {
        days
    }
}

/// Days still missing before `threshold` is reached; never negative.
pub fn days_needed(residency_days: u32, threshold: u32) -> u32 {
    threshold.saturating_sub(residency_days)
}

/// Whether `residency_days` meets `threshold`; with 183 this is `days > 182`.
pub fn is_considered_resident(residency_days: u32, threshold: u32) -> bool {
    residency_days > threshold.saturating_sub(1)
}
