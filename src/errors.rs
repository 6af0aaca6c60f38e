use thiserror::Error;

/// Reasons a candidate trip is rejected by the validator.
///
/// Every variant is terminal for a single add attempt: the caller discards the
/// candidate and resets its input. The `Display` text is suitable for showing
/// directly to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a departure date.")]
    MissingDeparture,
    #[error("Please select a return date or mark the trip as ongoing.")]
    MissingReturn,
    #[error("New trip overlaps with an existing trip.")]
    OverlapDetected,
    #[error("Cannot add a trip while an existing trip is ongoing.")]
    OngoingConflict,
    #[error("Return date cannot be before departure date.")]
    InvertedRange,
    #[error("Departure date cannot be in the future.")]
    FutureDeparture,
    #[error("Return date cannot be in the future.")]
    FutureReturn,
}

/// Error raised when a fiscal-year label cannot be interpreted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FiscalYearError {
    #[error("Invalid fiscal year label `{0}` (expected `YYYY-YYYY` with consecutive years)")]
    InvalidLabel(String),
    #[error("Fiscal year starting in {0} is outside the supported date range")]
    OutOfRange(i32),
}

/// Crate-level error covering I/O, input decoding and engine rejections.
#[derive(Debug, Error)]
pub enum ResidencyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    FiscalYear(#[from] FiscalYearError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Trip #{} rejected: {}", .index + 1, .source)]
    RejectedTrip {
        index: usize,
        #[source]
        source: ValidationError,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type ResidencyResult<T> = Result<T, ResidencyError>;
