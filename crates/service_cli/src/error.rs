//! CLI error types.

use std::path::PathBuf;

use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::InstrumentError;
use pricer_risk::RiskError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `neutryx` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed TOML.
    #[error("TOML error in {}: {source}", .path.display())]
    Toml {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Option contract rejected.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Option pricing failed.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),

    /// Asset or VaR failure.
    #[error(transparent)]
    Risk(#[from] RiskError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
