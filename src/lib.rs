#![doc(test(attr(deny(warnings))))]

//! Residency Core counts the days a person spent abroad within an
//! April-to-March fiscal year, validating the trips it is given so that the
//! count never double-books a day.
//!
//! Every computation takes `now` explicitly; nothing in the engine reads the
//! system clock.

pub mod cli;
pub mod clock;
pub mod config;
pub mod errors;
pub mod fiscal;
pub mod residency;
pub mod trips;
pub mod utils;

pub use errors::{FiscalYearError, ResidencyError, ValidationError};
pub use fiscal::{
    current_fiscal_year_label, enumerate_fiscal_years, fiscal_year_label, fiscal_year_window,
    DateWindow, FiscalYear,
};
pub use residency::{compute_residency_days, ResidencySummary, RESIDENCY_THRESHOLD_DAYS};
pub use trips::{close_ongoing_trip, validate_new_trip, Trip, TripDraft, TripEnd, TripLog};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing at the default level and emits a startup log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(0);
        tracing::info!("Residency Core tracing initialized.");
    });
}
