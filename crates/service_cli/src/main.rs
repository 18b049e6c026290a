//! Neutryx CLI - Option Pricing and FX Value-at-Risk
//!
//! This is the operational entry point for the Neutryx pricing libraries.
//!
//! # Commands
//!
//! - `neutryx price --contract <file>` - Black-Scholes premiums for a European option
//! - `neutryx var --rates <file> --portfolios <file>` - Historical-simulation VaR per portfolio
//! - `neutryx check` - Print the effective configuration
//!
//! # Configuration
//!
//! Settings are merged from (highest priority first) command-line flags,
//! `NEUTRYX_*` environment variables, the `--config` TOML file and defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod loader;

use commands::OutputFormat;
use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// Neutryx option pricing and VaR CLI
#[derive(Parser)]
#[command(name = "neutryx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, value_name = "FILE", env = "NEUTRYX_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Date format for string dates, e.g. DD-MM-YYYY or %Y-%m-%d
    #[arg(long, global = true)]
    date_format: Option<String>,

    /// Market-rate CSV delimiter
    #[arg(long, global = true)]
    delimiter: Option<char>,

    /// Decimal precision policy for rates (ignore, warn, reject)
    #[arg(long, global = true)]
    precision_policy: Option<String>,

    /// Day-count reference year (defaults to the current year)
    #[arg(long, global = true)]
    reference_year: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option contract
    Price {
        /// Path to the contract TOML file
        #[arg(short = 'k', long, value_name = "FILE")]
        contract: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Compute historical-simulation VaR for each portfolio
    Var {
        /// Path to the market-rate CSV file
        #[arg(short, long, value_name = "FILE")]
        rates: PathBuf,

        /// Path to the portfolio TOML file
        #[arg(short, long, value_name = "FILE")]
        portfolios: PathBuf,

        /// Holding horizon in observations
        #[arg(long)]
        horizon: Option<usize>,

        /// Compute portfolios in parallel
        #[arg(long)]
        parallel: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the effective configuration
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        let (horizon, parallel) = match &cli.command {
            Commands::Var {
                horizon, parallel, ..
            } => (*horizon, *parallel),
            _ => (None, false),
        };
        Self {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            date_format: cli.date_format.clone(),
            csv_delimiter: cli.delimiter,
            horizon,
            precision_policy: cli.precision_policy.clone(),
            parallel,
            reference_year: cli.reference_year,
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs::from(&cli))?;
    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Price { contract, format } => commands::price::run(&config, &contract, format),
        Commands::Var {
            rates,
            portfolios,
            format,
            ..
        } => commands::var::run(&config, &rates, &portfolios, format),
        Commands::Check => commands::check::run(&config),
    }
}
