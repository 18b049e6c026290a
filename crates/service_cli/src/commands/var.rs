//! VaR command implementation
//!
//! Computes historical-simulation VaR for every portfolio in a definition file.

use std::collections::BTreeMap;
use std::path::Path;

use pricer_risk::parallel::{self, ParallelConfig};
use pricer_risk::{Portfolio, PortfolioDefinition, RawTable, VarConfig, VarEngine};
use tracing::info;

use super::OutputFormat;
use crate::config::CliConfig;
use crate::loader;
use crate::{CliError, Result};

/// Builds portfolios from their definitions against a market-rate table.
pub fn build_portfolios(
    config: &CliConfig,
    table: &RawTable,
    definitions: &[PortfolioDefinition],
) -> Result<Vec<Portfolio>> {
    let options = config.asset_options();
    definitions
        .iter()
        .map(|definition| Portfolio::from_definition(table, definition, &options))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(CliError::from)
}

/// Computes VaR for each portfolio, fanning out when the config asks for it.
pub fn compute(config: &CliConfig, portfolios: &[Portfolio]) -> Result<BTreeMap<String, f64>> {
    let engine = VarEngine::new(VarConfig::new(config.horizon)?);
    let results = if config.parallel {
        parallel::calculate_for_portfolios(&engine, portfolios, &ParallelConfig::default())?
    } else {
        engine.calculate_for_portfolios(portfolios)?
    };
    Ok(results)
}

/// Renders the portfolio-to-VaR mapping.
pub fn render(results: &BTreeMap<String, f64>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Table => {
            let width = results
                .keys()
                .map(|name| name.chars().count())
                .max()
                .unwrap_or(0)
                .max("Portfolio".len());
            let bar = "─".repeat(width + 2);
            let mut out = String::new();
            out.push_str(&format!("┌{}┬────────────────────┐\n", bar));
            out.push_str(&format!("│ {:<width$} │ {:>18} │\n", "Portfolio", "VaR", width = width));
            out.push_str(&format!("├{}┼────────────────────┤\n", bar));
            for (name, var) in results {
                out.push_str(&format!("│ {:<width$} │ {:>18.6} │\n", name, var, width = width));
            }
            out.push_str(&format!("└{}┴────────────────────┘\n", bar));
            Ok(out)
        }
    }
}

/// Run the var command
pub fn run(
    config: &CliConfig,
    rates_path: &Path,
    portfolios_path: &Path,
    format: OutputFormat,
) -> Result<()> {
    info!(
        rates = %rates_path.display(),
        portfolios = %portfolios_path.display(),
        horizon = config.horizon,
        parallel = config.parallel,
        "Starting VaR calculation"
    );

    let table = loader::read_market_rates(rates_path, config.delimiter_byte())?;
    let definitions = loader::read_portfolios(portfolios_path)?;
    let portfolios = build_portfolios(config, &table, &definitions)?;
    let results = compute(config, &portfolios)?;

    print!("{}", render(&results, format)?);

    info!(portfolios = results.len(), "VaR calculation complete");
    Ok(())
}
