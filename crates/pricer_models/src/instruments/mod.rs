//! Option contract definitions.
//!
//! This module provides:
//! - [`OptionContract`]: validated European option contract
//! - [`OptionContractBuilder`]: raw fields and the construction pipeline
//! - [`ExerciseStyle`]: European or American exercise
//! - [`InstrumentError`]: construction failures

pub mod error;
pub mod exercise;
pub mod option_contract;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use option_contract::{ContractWarning, DateInput, OptionContract, OptionContractBuilder};
