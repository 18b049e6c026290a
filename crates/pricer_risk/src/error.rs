//! Risk error types.
//!
//! This module provides structured error types for market-rate ingestion,
//! asset validation and VaR computation using `thiserror` for derivation.

use pricer_core::types::{Date, DateError, ErrorKind, PricingError};
use thiserror::Error;

/// Errors that can occur while building assets or computing VaR.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RiskError {
    /// Required columns absent from the market-rate table.
    #[error("Market rate table is missing required columns: {}", .missing.join(", "))]
    MissingColumns {
        /// Names of the absent columns
        missing: Vec<String>,
    },

    /// The same column name appears twice in the header.
    #[error("Duplicate column in market rate table: {column}")]
    DuplicateColumn {
        /// Repeated column name
        column: String,
    },

    /// A row has a different number of cells than the header.
    #[error("Row {row} has {found} cells, expected {expected}")]
    RowWidthMismatch {
        /// Zero-based row index
        row: usize,
        /// Header width
        expected: usize,
        /// Row width
        found: usize,
    },

    /// No rows match the asset identifier.
    #[error("No market rates found for asset: {asset}")]
    NoRowsForAsset {
        /// Asset identifier
        asset: String,
    },

    /// A rate cell is not a positive number.
    #[error("Invalid market rate for asset {asset} on {date}: '{value}'")]
    InvalidRate {
        /// Asset identifier
        asset: String,
        /// Observation date
        date: Date,
        /// Raw cell content
        value: String,
    },

    /// String rates carry different numbers of decimals.
    #[error("Inconsistent rate precision for asset {asset}: between {min} and {max} decimals")]
    InconsistentPrecision {
        /// Asset identifier
        asset: String,
        /// Fewest decimals observed
        min: usize,
        /// Most decimals observed
        max: usize,
    },

    /// Asset exposure must be non-negative.
    #[error("Invalid value for asset {asset}: {value} must be >= 0")]
    NegativeExposure {
        /// Asset identifier
        asset: String,
        /// The offending exposure
        value: f64,
    },

    /// Risk type outside the supported set.
    #[error("Unsupported risk type '{risk_type}', supported: {supported}")]
    UnsupportedRiskType {
        /// Requested risk type
        risk_type: String,
        /// Comma-separated supported types
        supported: String,
    },

    /// Date absent or malformed.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Horizon must be at least one observation.
    #[error("Invalid time horizon: {horizon} must be >= 1")]
    InvalidHorizon {
        /// The offending horizon
        horizon: usize,
    },

    /// Horizon leaves no observations to shift against.
    #[error(
        "Insufficient history for asset {asset}: horizon {horizon} with {observations} observations"
    )]
    InsufficientHistory {
        /// Asset identifier
        asset: String,
        /// Requested horizon
        horizon: usize,
        /// Available observations
        observations: usize,
    },

    /// Aggregated profit/loss series too short for the VaR interpolation.
    #[error("Insufficient profit/loss observations: {available} available, {required} required")]
    InsufficientObservations {
        /// Minimum number of observations
        required: usize,
        /// Available observations
        available: usize,
    },

    /// Portfolio has no assets.
    #[error("Portfolio is empty")]
    EmptyPortfolio,

    /// Two portfolios share a name.
    #[error("Duplicate portfolio name: {name}")]
    DuplicatePortfolio {
        /// Repeated name
        name: String,
    },

    /// Failure inside a named portfolio.
    #[error("Portfolio '{portfolio}': {source}")]
    InPortfolio {
        /// Portfolio name
        portfolio: String,
        /// Underlying failure
        source: Box<RiskError>,
    },
}

impl RiskError {
    /// Returns the failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RiskError::InvalidRate { .. } => ErrorKind::Parse,
            RiskError::Date(err) => err.kind(),
            RiskError::InsufficientHistory { .. }
            | RiskError::InsufficientObservations { .. }
            | RiskError::EmptyPortfolio => ErrorKind::Computation,
            RiskError::InPortfolio { source, .. } => source.kind(),
            _ => ErrorKind::Validation,
        }
    }

    /// Attaches a portfolio name to the error.
    pub fn in_portfolio(self, portfolio: impl Into<String>) -> Self {
        RiskError::InPortfolio {
            portfolio: portfolio.into(),
            source: Box::new(self),
        }
    }
}

impl From<RiskError> for PricingError {
    fn from(err: RiskError) -> Self {
        PricingError::new(err.kind(), err.to_string())
    }
}
