//! Day aggregation for a selected fiscal year.

pub mod aggregator;
pub mod summary;

pub use aggregator::{
    compute_residency_days, compute_residency_days_for_label, days_needed, is_considered_resident,
    trip_days_in_year, RESIDENCY_THRESHOLD_DAYS,
};
pub use summary::{trip_rows, ResidencySummary, TripRow, TripStatus};
