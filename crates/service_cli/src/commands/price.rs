//! Price command implementation
//!
//! Prices a European option contract read from a TOML file.

use std::path::Path;

use pricer_models::analytical::OptionPremiums;
use pricer_models::instruments::OptionContract;
use serde_json::json;
use tracing::info;

use super::OutputFormat;
use crate::config::CliConfig;
use crate::loader;
use crate::Result;

/// Renders premiums and contract warnings.
pub fn render(
    contract: &OptionContract,
    premiums: &OptionPremiums,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let warnings: Vec<String> = contract.warnings().iter().map(|w| w.to_string()).collect();
            let value = json!({
                "time_to_maturity": contract.time_to_maturity(),
                "forward_price": contract.forward_price(),
                "premiums": premiums,
                "warnings": warnings,
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Table => {
            let rows = [
                ("Time to maturity", contract.time_to_maturity()),
                ("Forward price", contract.forward_price()),
                ("Call (spot)", premiums.call_spot_price),
                ("Call (forward)", premiums.call_forward_price),
                ("Put (forward)", premiums.put_forward_price),
                ("Put (parity)", premiums.put_call_parity),
            ];
            let mut out = String::new();
            out.push_str("┌──────────────────┬──────────────┐\n");
            out.push_str("│ Quantity         │ Value        │\n");
            out.push_str("├──────────────────┼──────────────┤\n");
            for (label, value) in rows {
                out.push_str(&format!("│ {:<16} │ {:>12.5} │\n", label, value));
            }
            out.push_str("└──────────────────┴──────────────┘\n");
            for warning in contract.warnings() {
                out.push_str(&format!("warning: {}\n", warning));
            }
            Ok(out)
        }
    }
}

/// Run the price command
pub fn run(config: &CliConfig, contract_path: &Path, format: OutputFormat) -> Result<()> {
    info!(contract = %contract_path.display(), "Starting pricing");

    let contract = loader::read_contract(contract_path)?
        .date_format(config.date_format.clone())
        .day_count(config.day_count())
        .build()?;
    let premiums = contract.price_all()?;

    print!("{}", render(&contract, &premiums, format)?);

    info!("Pricing complete");
    Ok(())
}
