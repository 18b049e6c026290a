//! # pricer_core: Foundation Types for Option Pricing and Market Risk
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DateFormat`, `LeapAdjustedDayCount` (`types::time`)
//! - Error types: `PricingError`, `ErrorKind`, `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - chrono: Date arithmetic and formatting
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{Date, DateFormat, LeapAdjustedDayCount};
//!
//! // Dates in the default DD-MM-YYYY format
//! let trade = Date::parse_with_format("23-11-2022", &DateFormat::default()).unwrap();
//! let expiry = Date::parse_with_format("10-05-2023", &DateFormat::default()).unwrap();
//! assert_eq!(expiry - trade, 168);
//!
//! // Day count pinned to a non-leap reference year
//! let basis = LeapAdjustedDayCount::for_year(2023);
//! let t = basis.year_fraction(trade, expiry);
//! assert!((t - 168.0 / 365.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation support for `Date` and `DateFormat`

pub mod types;
