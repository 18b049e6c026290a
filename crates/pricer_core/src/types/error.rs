//! Error types for structured error handling.
//!
//! This module provides:
//! - `ErrorKind`: The three failure categories shared by every crate
//! - `PricingError`: Categorised error that crate-specific errors convert into
//! - `DateError`: Errors from date construction and parsing

use thiserror::Error;

/// Failure category of an error.
///
/// Every crate-specific error maps onto exactly one of these kinds:
/// - `Parse`: a malformed date or numeric string
/// - `Validation`: a constraint on the inputs was violated
/// - `Computation`: the formulas cannot be evaluated for otherwise valid inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed date or numeric string.
    Parse,
    /// Input constraint violated.
    Validation,
    /// Formula undefined for the given inputs.
    Computation,
}

impl ErrorKind {
    /// Returns the category name.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::Validation => "validation",
            ErrorKind::Computation => "computation",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Categorised pricing and risk errors.
///
/// Crate-level errors (`InstrumentError`, `AnalyticalError`, `RiskError`)
/// convert into this type so callers can branch on the category alone.
///
/// # Examples
/// ```
/// use pricer_core::types::{ErrorKind, PricingError};
///
/// let err = PricingError::Validation("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Validation error: Negative spot price");
/// assert_eq!(err.kind(), ErrorKind::Validation);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Malformed date or numeric input.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input constraint violated.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Formula could not be evaluated.
    #[error("Computation error: {0}")]
    Computation(String),
}

impl PricingError {
    /// Returns the failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::Parse(_) => ErrorKind::Parse,
            PricingError::Validation(_) => ErrorKind::Validation,
            PricingError::Computation(_) => ErrorKind::Computation,
        }
    }

    /// Builds an error of the given kind from a message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        match kind {
            ErrorKind::Parse => PricingError::Parse(message.into()),
            ErrorKind::Validation => PricingError::Validation(message.into()),
            ErrorKind::Computation => PricingError::Computation(message.into()),
        }
    }
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: String does not match the expected format
/// - `Missing`: A required date field was not supplied
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::ParseError {
///     value: "2022/11/23".to_string(),
///     format: "DD-MM-YYYY".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Date parse error: '2022/11/23' does not match expected format DD-MM-YYYY"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// String could not be parsed with the expected format.
    #[error("Date parse error: '{value}' does not match expected format {format}")]
    ParseError {
        /// The offending string
        value: String,
        /// Human-readable expected format (e.g. `DD-MM-YYYY`)
        format: String,
    },

    /// A required date was not supplied.
    #[error("Missing date: {field}")]
    Missing {
        /// Name of the absent field
        field: String,
    },
}

impl DateError {
    /// Returns the failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DateError::ParseError { .. } => ErrorKind::Parse,
            DateError::InvalidDate { .. } | DateError::Missing { .. } => ErrorKind::Validation,
        }
    }
}

impl From<DateError> for PricingError {
    fn from(err: DateError) -> Self {
        PricingError::new(err.kind(), err.to_string())
    }
}
