//! # Pricer Risk (L4: Application)
//!
//! Market-rate assets and historical-simulation Value-at-Risk.
//!
//! This crate provides:
//! - Raw market-rate tables and date-indexed series
//! - Risk assets validated against their own rate history
//! - FX profit/loss scenarios with square-root-of-time scaling
//! - Portfolio VaR by weighted order-statistic interpolation
//! - Rayon-based fan-out across portfolios
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  market/     - RawTable, DatedSeries    │
//! │  asset/      - RiskAsset, RiskType      │
//! │  portfolio/  - Portfolio definitions    │
//! │  var/        - VarEngine, VarConfig     │
//! │  parallel/   - Rayon utilities          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            pricer_core (L1)             │
//! │  Dates, date formats, error kinds       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_risk::{
//!     AssetDefinition, AssetOptions, Portfolio, RawCell, RawTable, RiskAsset, VarEngine,
//! };
//!
//! let rates = [1.00, 0.98, 0.97, 0.99, 0.96, 0.95];
//! let rows = rates
//!     .iter()
//!     .enumerate()
//!     .map(|(i, r)| vec![
//!         RawCell::from(format!("{:02}-03-2023", i + 1)),
//!         RawCell::from("ccy-1"),
//!         RawCell::from(*r),
//!     ])
//!     .collect();
//! let table = RawTable::new(vec!["date".into(), "asset_id".into(), "rate".into()], rows).unwrap();
//!
//! let asset = RiskAsset::new(
//!     &table,
//!     &AssetDefinition::new("ccy-1", "FX", 100_000.0),
//!     &AssetOptions::default(),
//! )
//! .unwrap();
//!
//! let results = VarEngine::default()
//!     .calculate_for_portfolios(&[Portfolio::new("SPOT", vec![asset])])
//!     .unwrap();
//! assert!(results["SPOT"] < 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod asset;
pub mod error;
pub mod market;
pub mod parallel;
pub mod portfolio;
pub mod var;

// Re-export commonly used types
pub use asset::{AssetDefinition, AssetOptions, PrecisionPolicy, RiskAsset, RiskType};
pub use error::RiskError;
pub use market::{DatedSeries, RawCell, RawTable};
pub use parallel::ParallelConfig;
pub use portfolio::{Portfolio, PortfolioDefinition};
pub use var::{VarConfig, VarEngine};
