//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_core::types::{DateFormat, LeapAdjustedDayCount};
use pricer_risk::{AssetOptions, PrecisionPolicy};
use serde::Deserialize;
use thiserror::Error;

/// Prefix of every configuration environment variable.
pub const ENV_PREFIX: &str = "NEUTRYX_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid CSV delimiter: {0:?}. Must be a single ASCII character")]
    InvalidDelimiter(String),

    #[error("Invalid horizon: {0}. Must be an integer >= 1")]
    InvalidHorizon(String),

    #[error("{0}")]
    InvalidPrecisionPolicy(String),

    #[error("Invalid reference year: {0}")]
    InvalidReferenceYear(String),

    #[error("Invalid boolean for {key}: {value}")]
    InvalidBool { key: String, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Format of string dates in contracts and rate files
    pub date_format: DateFormat,
    /// Field delimiter of market-rate CSV files
    pub csv_delimiter: char,
    /// VaR holding horizon in observations
    pub horizon: usize,
    /// Decimal precision check for string rates
    pub precision_policy: PrecisionPolicy,
    /// Fan VaR out across portfolios with rayon
    pub parallel: bool,
    /// Day-count reference year; the current year when absent
    pub reference_year: Option<i32>,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            date_format: DateFormat::default(),
            csv_delimiter: ';',
            horizon: 1,
            precision_policy: PrecisionPolicy::Warn,
            parallel: false,
            reference_year: None,
        }
    }
}

impl CliConfig {
    /// Overrides the fields whose variable `lookup` returns.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = var("DATE_FORMAT") {
            self.date_format = parse_date_format(&format)?;
        }
        if let Some(delimiter) = var("CSV_DELIMITER") {
            self.csv_delimiter = parse_delimiter(&delimiter)?;
        }
        if let Some(horizon) = var("HORIZON") {
            self.horizon = horizon
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHorizon(horizon.clone()))?;
        }
        if let Some(policy) = var("PRECISION_POLICY") {
            self.precision_policy = parse_precision_policy(&policy)?;
        }
        if let Some(parallel) = var("PARALLEL") {
            self.parallel = match parallel.to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidBool {
                        key: format!("{}PARALLEL", ENV_PREFIX),
                        value: parallel,
                    })
                }
            };
        }
        if let Some(year) = var("REFERENCE_YEAR") {
            self.reference_year = Some(
                year.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidReferenceYear(year.clone()))?,
            );
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon == 0 {
            return Err(ConfigError::InvalidHorizon(self.horizon.to_string()));
        }
        if !self.csv_delimiter.is_ascii() {
            return Err(ConfigError::InvalidDelimiter(self.csv_delimiter.to_string()));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = &cli.date_format {
            self.date_format = parse_date_format(format)?;
        }
        if let Some(delimiter) = cli.csv_delimiter {
            self.csv_delimiter = delimiter;
        }
        if let Some(horizon) = cli.horizon {
            self.horizon = horizon;
        }
        if let Some(policy) = &cli.precision_policy {
            self.precision_policy = parse_precision_policy(policy)?;
        }
        if cli.parallel {
            self.parallel = true;
        }
        if let Some(year) = cli.reference_year {
            self.reference_year = Some(year);
        }
        Ok(())
    }

    /// Day count implied by `reference_year`.
    pub fn day_count(&self) -> LeapAdjustedDayCount {
        self.reference_year
            .map(LeapAdjustedDayCount::for_year)
            .unwrap_or_else(LeapAdjustedDayCount::current)
    }

    /// Asset parsing options.
    pub fn asset_options(&self) -> AssetOptions {
        AssetOptions {
            date_format: self.date_format.clone(),
            precision_policy: self.precision_policy,
        }
    }

    /// CSV delimiter as a byte.
    pub fn delimiter_byte(&self) -> u8 {
        // validate() guarantees an ASCII delimiter
        self.csv_delimiter as u8
    }
}

fn parse_date_format(s: &str) -> Result<DateFormat, ConfigError> {
    DateFormat::from_str(s).map_err(ConfigError::InvalidDateFormat)
}

fn parse_delimiter(s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(ConfigError::InvalidDelimiter(s.to_string())),
    }
}

fn parse_precision_policy(s: &str) -> Result<PrecisionPolicy, ConfigError> {
    PrecisionPolicy::from_str(s).map_err(ConfigError::InvalidPrecisionPolicy)
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Date format override
    pub date_format: Option<String>,
    /// CSV delimiter override
    pub csv_delimiter: Option<char>,
    /// VaR horizon override
    pub horizon: Option<usize>,
    /// Precision policy override
    pub precision_policy: Option<String>,
    /// Enable parallel VaR
    pub parallel: bool,
    /// Day-count reference year override
    pub reference_year: Option<i32>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;

    Ok(config)
}
