//! Instrument error types.
//!
//! This module provides structured error handling for option contract
//! construction. Every failure names the field, the offending value and
//! the constraint it violated.

use pricer_core::types::{Date, DateError, ErrorKind, PricingError};
use thiserror::Error;

/// Instrument construction errors.
///
/// # Variants
/// - `Date`: A date was absent or could not be parsed
/// - `ExpiryNotAfterTrade`: Expiry date is on or before the trade date
/// - `NegativeValue`: A field required to be non-negative is negative
/// - `NonPositiveValue`: A field required to be strictly positive is not
/// - `RiskFreeRateOutOfRange`: Risk-free rate outside (0, 1]
/// - `NonFinite`: A numeric field is NaN or infinite
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::NegativeValue { field: "strike_price", value: -17.0 };
/// assert!(format!("{}", err).contains("-17"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Date absent or malformed.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Expiry date must be strictly after the trade date.
    #[error("Invalid dates: expiry date {expiry_date} must be after trade date {trade_date}")]
    ExpiryNotAfterTrade {
        /// Trade date
        trade_date: Date,
        /// Expiry date
        expiry_date: Date,
    },

    /// Field must be greater than or equal to zero.
    #[error("Invalid {field}: {value} must be >= 0")]
    NegativeValue {
        /// Name of the offending field
        field: &'static str,
        /// The offending value
        value: f64,
    },

    /// Field must be strictly greater than zero.
    #[error("Invalid {field}: {value} must be > 0")]
    NonPositiveValue {
        /// Name of the offending field
        field: &'static str,
        /// The offending value
        value: f64,
    },

    /// Risk-free rate must satisfy 0 < r <= 1.
    #[error("Invalid risk_free_rate: {rate} must satisfy 0 < r <= 1")]
    RiskFreeRateOutOfRange {
        /// The offending rate
        rate: f64,
    },

    /// Field is NaN or infinite.
    #[error("Invalid {field}: {value} is not a finite number")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
        /// The offending value
        value: f64,
    },
}

impl InstrumentError {
    /// Returns the failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InstrumentError::Date(err) => err.kind(),
            _ => ErrorKind::Validation,
        }
    }
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::new(err.kind(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_not_after_trade_display() {
        let err = InstrumentError::ExpiryNotAfterTrade {
            trade_date: Date::from_ymd(2023, 5, 10).unwrap(),
            expiry_date: Date::from_ymd(2022, 11, 23).unwrap(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid dates: expiry date 2022-11-23 must be after trade date 2023-05-10"
        );
    }

    #[test]
    fn test_rate_out_of_range_display() {
        let err = InstrumentError::RiskFreeRateOutOfRange { rate: 1.5 };
        assert_eq!(
            format!("{}", err),
            "Invalid risk_free_rate: 1.5 must satisfy 0 < r <= 1"
        );
    }

    #[test]
    fn test_date_error_is_transparent() {
        let err: InstrumentError = DateError::ParseError {
            value: "2022-11-23".to_string(),
            format: "DD-MM-YYYY".to_string(),
        }
        .into();
        assert_eq!(
            format!("{}", err),
            "Date parse error: '2022-11-23' does not match expected format DD-MM-YYYY"
        );
    }

    #[test]
    fn test_kinds() {
        let parse: InstrumentError = DateError::ParseError {
            value: "x".to_string(),
            format: "DD-MM-YYYY".to_string(),
        }
        .into();
        assert_eq!(parse.kind(), ErrorKind::Parse);

        let missing: InstrumentError = DateError::Missing {
            field: "trade_date".to_string(),
        }
        .into();
        assert_eq!(missing.kind(), ErrorKind::Validation);

        let negative = InstrumentError::NegativeValue {
            field: "spot_price",
            value: -1.0,
        };
        let pricing: PricingError = negative.into();
        assert_eq!(pricing.kind(), ErrorKind::Validation);
    }
}
