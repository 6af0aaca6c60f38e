use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fiscal::FiscalYear;
use crate::trips::Trip;

use super::aggregator::{
    compute_residency_days, days_needed, is_considered_resident, trip_days_in_year,
};

/// Headline figures for one fiscal year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResidencySummary {
    pub fiscal_year: FiscalYear,
    pub residency_days: u32,
    pub days_needed: u32,
    pub is_resident: bool,
    pub threshold: u32,
}

impl ResidencySummary {
    pub fn compute(
        trips: &[Trip],
        fiscal_year: FiscalYear,
        now: NaiveDate,
        threshold: u32,
    ) -> Self {
        let residency_days = compute_residency_days(trips, fiscal_year, now);
        Self {
            fiscal_year,
            residency_days,
            days_needed: days_needed(residency_days, threshold),
            is_resident: is_considered_resident(residency_days, threshold),
            threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Active,
    Ended,
}

/// One line of a trip listing for the selected fiscal year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripRow {
    pub departure: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: TripStatus,
    pub days_in_year: u32,
}

pub fn trip_rows(trips: &[Trip], fiscal_year: FiscalYear, now: NaiveDate) -> Vec<TripRow> {
    trips
        .iter()
        .map(|trip| TripRow {
            departure: trip.departure,
            return_date: trip.return_date(),
            status: if trip.is_ongoing() {
                TripStatus::Active
            } else {
                TripStatus::Ended
            },
            days_in_year: trip_days_in_year(trip, fiscal_year, now),
        })
        .collect()
}
