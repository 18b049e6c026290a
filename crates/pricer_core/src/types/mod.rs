//! Core time and error types.
//!
//! This module provides:
//! - `time`: Time types (Date, DateFormat, LeapAdjustedDayCount) for financial calculations
//! - `error`: Structured error types shared by the pricing and risk crates
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DateFormat`], [`LeapAdjustedDayCount`], [`is_leap_year`] from `time`
//! - [`PricingError`], [`ErrorKind`], [`DateError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, ErrorKind, PricingError};
pub use time::{is_leap_year, Date, DateFormat, LeapAdjustedDayCount};
