//! Risk assets backed by validated market-rate history.
//!
//! [`RiskAsset::new`] runs a fixed pipeline over a [`RawTable`]:
//!
//! 1. Require the `date`, `asset_id` and `rate` columns.
//! 2. Keep only the rows whose `asset_id` equals the asset name.
//! 3. Resolve dates (date cells as-is, text in the configured format).
//! 4. Sort newest first.
//! 5. Normalise rates (comma decimals, dot thousands separators) and apply
//!    the [`PrecisionPolicy`].
//! 6. Parse the risk type against the supported set.

mod rate;
mod risk_type;

pub use rate::PrecisionPolicy;
pub use risk_type::RiskType;

use pricer_core::types::{Date, DateError, DateFormat};
use tracing::debug;

use crate::error::RiskError;
use crate::market::{DatedSeries, RawCell, RawTable};
use rate::{decimal_places, normalise_decimal};

/// Column holding observation dates.
pub const DATE_COLUMN: &str = "date";
/// Column holding the asset identifier.
pub const ASSET_COLUMN: &str = "asset_id";
/// Column holding the market rate.
pub const RATE_COLUMN: &str = "rate";

/// Parsing options for [`RiskAsset::new`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetOptions {
    /// Format of text dates
    pub date_format: DateFormat,
    /// Decimal precision check
    pub precision_policy: PrecisionPolicy,
}

/// Identity and exposure of an asset, before its market rates are attached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetDefinition {
    /// Asset identifier, matched against the `asset_id` column
    pub name: String,
    /// Risk type tag, e.g. `"FX"`
    pub risk_type: String,
    /// Notional exposure
    pub value: f64,
}

impl AssetDefinition {
    /// Creates a definition.
    pub fn new(name: impl Into<String>, risk_type: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            risk_type: risk_type.into(),
            value,
        }
    }
}

/// Asset with its validated rate history, newest observation first.
///
/// # Examples
/// ```
/// use pricer_risk::asset::{AssetDefinition, AssetOptions, RiskAsset, RiskType};
/// use pricer_risk::market::RawTable;
///
/// let table = RawTable::new(
///     vec!["date".into(), "asset_id".into(), "rate".into()],
///     vec![
///         vec!["02-01-2023".into(), "ccy-1".into(), "1,05".into()],
///         vec!["03-01-2023".into(), "ccy-1".into(), "1,07".into()],
///         vec!["03-01-2023".into(), "ccy-2".into(), "0,91".into()],
///     ],
/// )
/// .unwrap();
///
/// let asset = RiskAsset::new(
///     &table,
///     &AssetDefinition::new("ccy-1", "FX", 1000.0),
///     &AssetOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(asset.risk_type(), RiskType::Fx);
/// assert_eq!(asset.rates().values().collect::<Vec<_>>(), vec![1.07, 1.05]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAsset {
    name: String,
    risk_type: RiskType,
    value: f64,
    rates: DatedSeries,
}

impl RiskAsset {
    /// Builds an asset from the rows of `table` that belong to it.
    ///
    /// Names are compared after trimming surrounding whitespace on both sides.
    ///
    /// # Errors
    /// In the order checked:
    /// - `RiskError::MissingColumns` if a required column is absent
    /// - `RiskError::NoRowsForAsset` if no row matches the name
    /// - `RiskError::Date` if a date cell is malformed
    /// - `RiskError::InvalidRate` if a rate is not a positive number
    /// - `RiskError::InconsistentPrecision` under [`PrecisionPolicy::Reject`]
    /// - `RiskError::UnsupportedRiskType` for tags outside [`RiskType::SUPPORTED`]
    /// - `RiskError::NegativeExposure` if the value is negative or not finite
    pub fn new(
        table: &RawTable,
        definition: &AssetDefinition,
        options: &AssetOptions,
    ) -> Result<Self, RiskError> {
        let name = definition.name.trim();
        table.require_columns(&[DATE_COLUMN, ASSET_COLUMN, RATE_COLUMN])?;
        let column = |header: &str| {
            table
                .column_index(header)
                .ok_or_else(|| RiskError::MissingColumns {
                    missing: vec![header.to_string()],
                })
        };
        let (date_col, asset_col, rate_col) =
            (column(DATE_COLUMN)?, column(ASSET_COLUMN)?, column(RATE_COLUMN)?);

        let mut observations = Vec::new();
        for row in table.rows().filter(|row| row[asset_col].as_text().trim() == name) {
            let date = resolve_date(&row[date_col], &options.date_format)?;
            observations.push((date, &row[rate_col]));
        }
        if observations.is_empty() {
            return Err(RiskError::NoRowsForAsset {
                asset: name.to_string(),
            });
        }
        observations.sort_by(|a, b| b.0.cmp(&a.0));

        let mut decimals = Vec::new();
        let mut points = Vec::with_capacity(observations.len());
        for (date, cell) in observations {
            let rate = match cell {
                RawCell::Number(value) => *value,
                RawCell::Text(text) => {
                    let normalised = normalise_decimal(text);
                    decimals.push(decimal_places(&normalised));
                    normalised
                        .parse::<f64>()
                        .map_err(|_| invalid_rate(name, date, cell))?
                }
                RawCell::Date(_) => return Err(invalid_rate(name, date, cell)),
            };
            if !rate.is_finite() || rate <= 0.0 {
                return Err(invalid_rate(name, date, cell));
            }
            points.push((date, rate));
        }
        options.precision_policy.check(name, &decimals)?;

        let risk_type: RiskType = definition.risk_type.parse()?;
        if !definition.value.is_finite() || definition.value < 0.0 {
            return Err(RiskError::NegativeExposure {
                asset: name.to_string(),
                value: definition.value,
            });
        }

        debug!(
            asset = name,
            %risk_type,
            value = definition.value,
            observations = points.len(),
            "risk asset validated"
        );

        Ok(Self {
            name: name.to_string(),
            risk_type,
            value: definition.value,
            rates: DatedSeries::new(points),
        })
    }

    /// Asset identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Risk type.
    pub fn risk_type(&self) -> RiskType {
        self.risk_type
    }

    /// Notional exposure.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Market rates, newest first.
    pub fn rates(&self) -> &DatedSeries {
        &self.rates
    }
}

fn resolve_date(cell: &RawCell, format: &DateFormat) -> Result<Date, DateError> {
    match cell {
        RawCell::Date(date) => Ok(*date),
        RawCell::Text(text) => Date::parse_with_format(text, format),
        RawCell::Number(_) => Err(DateError::ParseError {
            value: cell.to_string(),
            format: format.label(),
        }),
    }
}

fn invalid_rate(asset: &str, date: Date, cell: &RawCell) -> RiskError {
    RiskError::InvalidRate {
        asset: asset.to_string(),
        date,
        value: cell.to_string(),
    }
}
