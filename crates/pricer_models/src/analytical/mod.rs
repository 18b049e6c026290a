//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes spot and forward deltas, premiums and put-call parity
//! - The standard normal CDF
//! - Errors for formulas that are undefined on a given contract

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::{BlackScholes, Deltas, OptionPremiums};
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
