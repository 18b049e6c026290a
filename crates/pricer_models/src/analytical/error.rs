//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Failures while evaluating the Black-Scholes formulas

use pricer_core::types::{ErrorKind, PricingError};
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every variant is a computation failure: the contract itself is valid,
/// but the requested formula is undefined for it.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::ZeroVolatility { volatility: 0.0 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Volatility is zero, so σ√T in the delta denominators vanishes.
    #[error("Division by zero: asset volatility σ = {volatility}")]
    ZeroVolatility {
        /// The offending volatility
        volatility: f64,
    },

    /// Time to maturity is zero, so σ√T in the delta denominators vanishes.
    #[error("Division by zero: time to maturity T = {time_to_maturity}")]
    ZeroTimeToMaturity {
        /// The offending time to maturity
        time_to_maturity: f64,
    },

    /// A price entering ln(price/strike) is not strictly positive.
    #[error("Logarithm undefined: {field} = {value} must be positive")]
    NonPositiveInput {
        /// Name of the offending input
        field: &'static str,
        /// The offending value
        value: f64,
    },

    /// Pricing was requested for a contract the model does not cover.
    #[error("Unsupported exercise style: {style}")]
    UnsupportedExerciseStyle {
        /// Description of the unsupported exercise style
        style: String,
    },
}

impl AnalyticalError {
    /// Returns the failure category.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Computation
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::new(err.kind(), err.to_string())
    }
}
