//! Historical-simulation VaR engine.

use std::collections::BTreeMap;

use tracing::debug;

use super::config::VarConfig;
use crate::asset::{RiskAsset, RiskType};
use crate::error::RiskError;
use crate::market::DatedSeries;
use crate::portfolio::Portfolio;

/// Weight of the second-worst aggregated outcome.
const SECOND_WORST_WEIGHT: f64 = 0.4;
/// Weight of the third-worst aggregated outcome.
const THIRD_WORST_WEIGHT: f64 = 0.6;
/// Observations needed for the interpolation.
pub const MIN_OBSERVATIONS: usize = 3;

/// Historical-simulation VaR over portfolios of [`RiskAsset`]s.
///
/// The engine holds no per-asset state: profit/loss series are returned
/// to the caller, never stored on the assets.
#[derive(Clone, Debug, Default)]
pub struct VarEngine {
    config: VarConfig,
}

impl VarEngine {
    /// Creates an engine.
    pub fn new(config: VarConfig) -> Self {
        Self { config }
    }

    /// Engine configuration.
    pub fn config(&self) -> &VarConfig {
        &self.config
    }

    /// Profit/loss scenarios of one asset over the configured horizon.
    ///
    /// For FX each ratio `x = rate[t] / rate[t - h]` becomes
    /// `value · (exp(ln(x)·√h) - 1)`, keyed by the newer date.
    ///
    /// # Errors
    /// `RiskError::InsufficientHistory` if the horizon consumes every observation.
    pub fn profit_loss(&self, asset: &RiskAsset) -> Result<DatedSeries, RiskError> {
        let horizon = self.config.horizon();
        let ratios = asset.rates().shifted_ratio(horizon);
        if ratios.is_empty() {
            return Err(RiskError::InsufficientHistory {
                asset: asset.name().to_string(),
                horizon,
                observations: asset.rates().len(),
            });
        }

        let scaling = self.config.time_scaling();
        let value = asset.value();
        let pnl = match asset.risk_type() {
            RiskType::Fx => ratios.map_values(|x| value * ((x.ln() * scaling).exp() - 1.0)),
        };
        Ok(pnl)
    }

    /// VaR of a set of assets: weighted second and third worst outcome of
    /// the date-aligned sum of their profit/loss series.
    ///
    /// # Errors
    /// - `RiskError::EmptyPortfolio` if `assets` is empty
    /// - `RiskError::InsufficientHistory` from [`profit_loss`](Self::profit_loss)
    /// - `RiskError::InsufficientObservations` if fewer than three dates remain
    pub fn value_at_risk(&self, assets: &[RiskAsset]) -> Result<f64, RiskError> {
        if assets.is_empty() {
            return Err(RiskError::EmptyPortfolio);
        }
        let series = assets
            .iter()
            .map(|asset| self.profit_loss(asset))
            .collect::<Result<Vec<_>, _>>()?;
        let total = DatedSeries::sum_by_date(&series);
        let sorted = total.sorted_values();
        if sorted.len() < MIN_OBSERVATIONS {
            return Err(RiskError::InsufficientObservations {
                required: MIN_OBSERVATIONS,
                available: sorted.len(),
            });
        }
        Ok(SECOND_WORST_WEIGHT * sorted[1] + THIRD_WORST_WEIGHT * sorted[2])
    }

    /// VaR per portfolio, keyed by portfolio name.
    ///
    /// # Errors
    /// - `RiskError::DuplicatePortfolio` if two portfolios share a name
    /// - Any [`value_at_risk`](Self::value_at_risk) failure, tagged with the portfolio name
    pub fn calculate_for_portfolios(
        &self,
        portfolios: &[Portfolio],
    ) -> Result<BTreeMap<String, f64>, RiskError> {
        let mut results = BTreeMap::new();
        for portfolio in portfolios {
            if results.contains_key(portfolio.name()) {
                return Err(RiskError::DuplicatePortfolio {
                    name: portfolio.name().to_string(),
                });
            }
            let var = self.portfolio_var(portfolio)?;
            results.insert(portfolio.name().to_string(), var);
        }
        Ok(results)
    }

    /// VaR of one portfolio, with the portfolio name attached to failures.
    pub fn portfolio_var(&self, portfolio: &Portfolio) -> Result<f64, RiskError> {
        let var = self
            .value_at_risk(portfolio.assets())
            .map_err(|err| err.in_portfolio(portfolio.name()))?;
        debug!(
            portfolio = portfolio.name(),
            assets = portfolio.len(),
            horizon = self.config.horizon(),
            var,
            "portfolio VaR computed"
        );
        Ok(var)
    }
}
