//! File loaders for market rates, portfolios and option contracts.

use std::path::Path;

use pricer_models::instruments::OptionContractBuilder;
use pricer_risk::asset::{ASSET_COLUMN, RATE_COLUMN};
use pricer_risk::{PortfolioDefinition, RawCell, RawTable};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{CliError, Result};

/// Portfolio file layout: a list of `[[portfolio]]` tables.
#[derive(Debug, Deserialize)]
struct PortfolioFile {
    #[serde(default)]
    portfolio: Vec<PortfolioDefinition>,
}

fn read_to_string(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Maps a CSV header onto the column names the risk crate expects.
fn normalise_header(header: &str) -> String {
    let header = header.trim().to_lowercase();
    match header.as_str() {
        "asset" => ASSET_COLUMN.to_string(),
        "market_rate" => RATE_COLUMN.to_string(),
        _ => header,
    }
}

/// Reads a delimited market-rate file into a [`RawTable`].
///
/// Every cell is kept as text so that rate precision and the configured
/// date format are applied by the asset builder.
pub fn read_market_rates(path: &Path, delimiter: u8) -> Result<RawTable> {
    let content = read_to_string(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()?
        .iter()
        .map(normalise_header)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(RawCell::from).collect::<Vec<_>>());
    }

    let table = RawTable::new(headers, rows)?;
    info!(path = %path.display(), rows = table.len(), "loaded market rates");
    Ok(table)
}

/// Reads portfolio definitions from a TOML file.
pub fn read_portfolios(path: &Path) -> Result<Vec<PortfolioDefinition>> {
    let content = read_to_string(path)?;
    let file: PortfolioFile = toml::from_str(&content).map_err(|source| CliError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), portfolios = file.portfolio.len(), "loaded portfolios");
    Ok(file.portfolio)
}

/// Reads option contract fields from a TOML file.
pub fn read_contract(path: &Path) -> Result<OptionContractBuilder> {
    let content = read_to_string(path)?;
    toml::from_str(&content).map_err(|source| CliError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_market_rates_with_aliases() {
        let file = write_temp(
            "Date ; Asset ; Market_Rate\n01-03-2023;ccy-1;1,0512\n02-03-2023;ccy-1;1,0478\n",
        );
        let table = read_market_rates(file.path(), b';').unwrap();

        assert_eq!(table.headers(), &["date", "asset_id", "rate"]);
        assert_eq!(table.len(), 2);
        let first = table.rows().next().unwrap();
        assert_eq!(first[2].as_text(), "1,0512");
    }

    #[test]
    fn test_read_market_rates_comma_delimited() {
        let file = write_temp("date,asset_id,rate\n01-03-2023,ccy-1,1.05\n");
        let table = read_market_rates(file.path(), b',').unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_read_market_rates_ragged_row() {
        let file = write_temp("date;asset_id;rate\n01-03-2023;ccy-1\n");
        assert!(read_market_rates(file.path(), b';').is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = read_market_rates(Path::new("/nonexistent/rates.csv"), b';').unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_read_portfolios() {
        let file = write_temp(
            r#"
            [[portfolio]]
            name = "SPOT"

            [[portfolio.asset]]
            name = "ccy-1"
            risk_type = "FX"
            value = 153084.81

            [[portfolio.asset]]
            name = "ccy-2"
            risk_type = "FX"
            value = 95891.51

            [[portfolio]]
            name = "EMPTY"
            "#,
        );
        let portfolios = read_portfolios(file.path()).unwrap();

        assert_eq!(portfolios.len(), 2);
        assert_eq!(portfolios[0].name, "SPOT");
        assert_eq!(portfolios[0].assets.len(), 2);
        assert_eq!(portfolios[0].assets[1].value, 95891.51);
        assert!(portfolios[1].assets.is_empty());
    }

    #[test]
    fn test_read_portfolios_malformed() {
        let file = write_temp("[[portfolio]]\nname = 3\n");
        assert!(matches!(
            read_portfolios(file.path()).unwrap_err(),
            CliError::Toml { .. }
        ));
    }

    #[test]
    fn test_read_contract() {
        let file = write_temp(
            r#"
            spot_price = 19.0
            strike_price = 17.0
            trade_date = "23-11-2022"
            expiry_date = "10-05-2023"
            risk_free_rate = 0.005
            asset_volatility = 0.3
            "#,
        );
        let builder = read_contract(file.path()).unwrap();
        let contract = builder
            .day_count(pricer_core::types::LeapAdjustedDayCount::for_year(2023))
            .build()
            .unwrap();
        assert_eq!(contract.spot_price(), 19.0);
        assert!((contract.time_to_maturity() - 168.0 / 365.0).abs() < 1e-12);
    }
}
