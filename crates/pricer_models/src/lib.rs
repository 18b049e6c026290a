//! # Pricer Models (L2: Business Logic)
//!
//! Option contracts and closed-form Black-Scholes pricing.
//!
//! This crate provides:
//! - Validated European option contracts with derived time to maturity,
//!   rate constant and forward price
//! - Spot and forward Black-Scholes deltas
//! - Call, put and put-call parity premiums
//!
//! ## Design Principles
//!
//! - **Fail fast**: contracts are validated in full at construction
//! - **Warnings as values**: non-fatal inconsistencies travel with the contract
//! - **Builder pattern** for ergonomic API with sensible defaults

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
