//! Named portfolios of risk assets.

use crate::asset::{AssetDefinition, AssetOptions, RiskAsset};
use crate::error::RiskError;
use crate::market::RawTable;

/// Declarative portfolio: a name and its asset definitions.
///
/// Deserialises from
///
/// ```toml
/// [[portfolio]]
/// name = "SPOT"
///
/// [[portfolio.asset]]
/// name = "ccy-1"
/// risk_type = "FX"
/// value = 153084.81
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioDefinition {
    /// Portfolio name
    pub name: String,
    /// Asset definitions in order
    #[cfg_attr(feature = "serde", serde(rename = "asset", default))]
    pub assets: Vec<AssetDefinition>,
}

/// Named, ordered collection of [`RiskAsset`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    name: String,
    assets: Vec<RiskAsset>,
}

impl Portfolio {
    /// Creates a portfolio.
    pub fn new(name: impl Into<String>, assets: Vec<RiskAsset>) -> Self {
        Self {
            name: name.into(),
            assets,
        }
    }

    /// Builds every asset of `definition` against `table`.
    ///
    /// # Errors
    /// The first asset failure, tagged with the portfolio name.
    pub fn from_definition(
        table: &RawTable,
        definition: &PortfolioDefinition,
        options: &AssetOptions,
    ) -> Result<Self, RiskError> {
        let assets = definition
            .assets
            .iter()
            .map(|asset| RiskAsset::new(table, asset, options))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| err.in_portfolio(definition.name.as_str()))?;
        Ok(Self::new(definition.name.clone(), assets))
    }

    /// Portfolio name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assets in order.
    pub fn assets(&self) -> &[RiskAsset] {
        &self.assets
    }

    /// Number of assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if the portfolio has no assets.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::RawCell;

    fn table() -> RawTable {
        RawTable::new(
            vec!["date".into(), "asset_id".into(), "rate".into()],
            vec![
                vec![RawCell::from("02-01-2023"), "ccy-1".into(), "1,05".into()],
                vec![RawCell::from("02-01-2023"), "ccy-2".into(), "0,91".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_definition() {
        let definition = PortfolioDefinition {
            name: "SPOT".to_string(),
            assets: vec![
                AssetDefinition::new("ccy-1", "FX", 10.0),
                AssetDefinition::new("ccy-2", "FX", 20.0),
            ],
        };
        let portfolio =
            Portfolio::from_definition(&table(), &definition, &AssetOptions::default()).unwrap();
        assert_eq!(portfolio.name(), "SPOT");
        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.assets()[1].value(), 20.0);
    }

    #[test]
    fn test_from_definition_tags_failures() {
        let definition = PortfolioDefinition {
            name: "SPOT".to_string(),
            assets: vec![AssetDefinition::new("ccy-9", "FX", 10.0)],
        };
        let err = Portfolio::from_definition(&table(), &definition, &AssetOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            RiskError::NoRowsForAsset {
                asset: "ccy-9".to_string()
            }
            .in_portfolio("SPOT")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_definition_from_toml() {
        #[derive(serde::Deserialize)]
        struct File {
            portfolio: Vec<PortfolioDefinition>,
        }

        let file: File = toml::from_str(
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
            "#,
        )
        .unwrap();
        assert_eq!(file.portfolio.len(), 1);
        assert_eq!(file.portfolio[0].assets.len(), 2);
        assert_eq!(file.portfolio[0].assets[1].name, "ccy-2");
    }
}
