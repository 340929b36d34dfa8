//! Boundary validation errors.
//!
//! The engine functions themselves are total. Everything that can go wrong
//! happens while turning provider payloads or form strings into typed input,
//! and is reported here.

use thiserror::Error;

/// Rejection reasons for raw input arriving at the engine boundary.
#[derive(Debug, Error)]
pub enum InputError {
    /// Parallel provider arrays do not have the same number of entries.
    #[error("array length mismatch: {dates} dates, {maxima} maxima, {minima} minima")]
    LengthMismatch {
        dates: usize,
        maxima: usize,
        minima: usize,
    },

    /// A date string is not an ISO-8601 calendar date.
    #[error("invalid date {value:?} at index {index}")]
    InvalidDate { index: usize, value: String },

    /// A value is null / absent where one is required.
    #[error("missing {field} at index {index}")]
    MissingValue { field: &'static str, index: usize },

    /// A numeric value is NaN, infinite or physically impossible.
    #[error("{field} is not a finite, physical value: {value}")]
    NonFiniteValue { field: &'static str, value: f64 },

    /// A form field does not parse as a number.
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// A measurement that must be non-negative is negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// A measurement is larger than any real tree.
    #[error("{field} of {value} exceeds the plausible maximum {max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        max: f64,
    },

    /// Dates are not strictly ascending.
    #[error("date {current} at index {index} does not follow {previous}")]
    OutOfOrder {
        index: usize,
        previous: chrono::NaiveDate,
        current: chrono::NaiveDate,
    },

    /// The provider payload is not valid JSON of the expected shape.
    #[error("malformed weather payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for boundary results.
pub type InputResult<T> = Result<T, InputError>;
