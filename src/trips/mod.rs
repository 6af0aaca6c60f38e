//! Trip data model, validation rules and the copy-on-write trip log.

pub mod trip;
pub mod trip_log;
pub mod validator;

pub use trip::{Trip, TripDraft, TripEnd};
pub use trip_log::TripLog;
pub use validator::{close_ongoing_trip, validate_new_trip};
