//! Black-Scholes pricing for European option contracts.
//!
//! ## Mathematical Formulas
//!
//! **Spot d₁**: (ln(P/K) + (r_c + σ²/2)T) / (σ√T)
//! **Forward d₁**: (ln(P/K) + (σ²/2)T) / (σ√T)
//! **d₂**: d₁ - σ√T
//! **Call**: e^(-r_c·T)·[P·N(d₁) - K·N(d₂)]
//! **Put**: e^(-r_c·T)·[K·N(-d₂) - P·N(-d₁)]
//! **Put-call parity**: C_fwd - S + K·e^(-r_c·T)
//!
//! Where P is the priced quantity, K the strike, r_c the continuously
//! compounded rate constant, σ the volatility and T the time to maturity.

use tracing::debug;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::OptionContract;

/// Pair of standardised Black-Scholes variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deltas {
    /// d₁
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
}

/// Premiums produced by [`BlackScholes::price_all`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPremiums {
    /// Call premium from the spot-price d₁
    pub call_spot_price: f64,
    /// Call premium from the forward-price d₁
    pub call_forward_price: f64,
    /// Put premium from the forward-price d₁
    pub put_forward_price: f64,
    /// Put premium implied by put-call parity from the forward call
    pub put_call_parity: f64,
}

/// Black-Scholes pricer borrowing a validated [`OptionContract`].
///
/// # Examples
/// ```
/// use pricer_core::types::LeapAdjustedDayCount;
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionContract;
///
/// let contract = OptionContract::builder()
///     .spot_price(19.0)
///     .strike_price(17.0)
///     .trade_date("23-11-2022")
///     .expiry_date("10-05-2023")
///     .asset_volatility(0.3)
///     .day_count(LeapAdjustedDayCount::for_year(2023))
///     .build()
///     .unwrap();
///
/// let premiums = BlackScholes::new(&contract).price_all().unwrap();
/// assert!((premiums.call_forward_price - 2.69688).abs() < 5e-6);
/// assert!((premiums.put_forward_price - premiums.put_call_parity).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<'a> {
    contract: &'a OptionContract,
}

impl<'a> BlackScholes<'a> {
    /// Creates a pricer over `contract`.
    pub fn new(contract: &'a OptionContract) -> Self {
        Self { contract }
    }

    /// Returns the priced contract.
    #[inline]
    pub fn contract(&self) -> &'a OptionContract {
        self.contract
    }

    /// σ√T, checked to be non-zero.
    fn vol_sqrt_t(&self) -> Result<f64, AnalyticalError> {
        let volatility = self.contract.asset_volatility();
        let time_to_maturity = self.contract.time_to_maturity();
        if volatility <= 0.0 {
            return Err(AnalyticalError::ZeroVolatility { volatility });
        }
        if time_to_maturity <= 0.0 {
            return Err(AnalyticalError::ZeroTimeToMaturity { time_to_maturity });
        }
        Ok(volatility * time_to_maturity.sqrt())
    }

    /// ln(price / strike), checked to be defined.
    fn log_moneyness(&self, price: f64) -> Result<f64, AnalyticalError> {
        if price <= 0.0 {
            return Err(AnalyticalError::NonPositiveInput {
                field: "price",
                value: price,
            });
        }
        let strike = self.contract.strike_price();
        if strike <= 0.0 {
            return Err(AnalyticalError::NonPositiveInput {
                field: "strike_price",
                value: strike,
            });
        }
        Ok((price / strike).ln())
    }

    /// Spot-price d₁, including the rate constant in the drift.
    ///
    /// # Errors
    /// - `AnalyticalError::ZeroVolatility` if σ = 0
    /// - `AnalyticalError::ZeroTimeToMaturity` if T = 0
    /// - `AnalyticalError::NonPositiveInput` if `price` or the strike is <= 0
    pub fn spot_delta_one(&self, price: f64) -> Result<f64, AnalyticalError> {
        let vol_sqrt_t = self.vol_sqrt_t()?;
        let c = self.contract;
        let sigma = c.asset_volatility();
        let drift = (c.risk_free_rate_constant() + 0.5 * sigma * sigma) * c.time_to_maturity();
        Ok((self.log_moneyness(price)? + drift) / vol_sqrt_t)
    }

    /// Forward-price d₁; the forward already embeds discounting.
    ///
    /// # Errors
    /// Same as [`spot_delta_one`](Self::spot_delta_one).
    pub fn forward_delta_one(&self, price: f64) -> Result<f64, AnalyticalError> {
        let vol_sqrt_t = self.vol_sqrt_t()?;
        let c = self.contract;
        let sigma = c.asset_volatility();
        let drift = 0.5 * sigma * sigma * c.time_to_maturity();
        Ok((self.log_moneyness(price)? + drift) / vol_sqrt_t)
    }

    /// d₂ = d₁ - σ√T.
    #[inline]
    pub fn delta_two(&self, d1: f64) -> f64 {
        d1 - self.contract.asset_volatility() * self.contract.time_to_maturity().sqrt()
    }

    /// Spot-price (d₁, d₂) pair.
    pub fn spot_deltas(&self, price: f64) -> Result<Deltas, AnalyticalError> {
        let d1 = self.spot_delta_one(price)?;
        Ok(Deltas {
            d1,
            d2: self.delta_two(d1),
        })
    }

    /// Forward-price (d₁, d₂) pair.
    pub fn forward_deltas(&self, price: f64) -> Result<Deltas, AnalyticalError> {
        let d1 = self.forward_delta_one(price)?;
        Ok(Deltas {
            d1,
            d2: self.delta_two(d1),
        })
    }

    /// Discount factor e^(-r_c·T).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.contract.risk_free_rate_constant() * self.contract.time_to_maturity()).exp()
    }

    /// Call premium for `price` given its (d₁, d₂).
    pub fn call_price(&self, price: f64, deltas: Deltas) -> f64 {
        let strike = self.contract.strike_price();
        self.discount_factor() * (price * norm_cdf(deltas.d1) - strike * norm_cdf(deltas.d2))
    }

    /// Put premium for `price` given its (d₁, d₂).
    pub fn put_price(&self, price: f64, deltas: Deltas) -> f64 {
        let strike = self.contract.strike_price();
        self.discount_factor() * (strike * norm_cdf(-deltas.d2) - price * norm_cdf(-deltas.d1))
    }

    /// Put premium implied by a forward call premium.
    pub fn put_call_parity(&self, forward_call_price: f64) -> f64 {
        forward_call_price - self.contract.spot_price()
            + self.contract.strike_price() * self.discount_factor()
    }

    /// Prices spot call, forward call, forward put and the parity put.
    ///
    /// The forward price is the priced quantity in every premium. The spot
    /// branch evaluates its d₁ at the spot price, which makes it agree with
    /// the forward branch evaluated at the forward price.
    ///
    /// # Errors
    /// - `AnalyticalError::UnsupportedExerciseStyle` for non-European contracts
    /// - Any error from the d₁ computations
    pub fn price_all(&self) -> Result<OptionPremiums, AnalyticalError> {
        let c = self.contract;
        if !c.is_european() {
            return Err(AnalyticalError::UnsupportedExerciseStyle {
                style: c.exercise_style().to_string(),
            });
        }

        let forward = c.forward_price();
        let spot = self.spot_deltas(c.spot_price())?;
        let fwd = self.forward_deltas(forward)?;
        debug!(
            spot_d1 = spot.d1,
            spot_d2 = spot.d2,
            forward_d1 = fwd.d1,
            forward_d2 = fwd.d2,
            "black-scholes deltas"
        );

        let call_forward_price = self.call_price(forward, fwd);
        let premiums = OptionPremiums {
            call_spot_price: self.call_price(forward, spot),
            call_forward_price,
            put_forward_price: self.put_price(forward, fwd),
            put_call_parity: self.put_call_parity(call_forward_price),
        };
        debug!(?premiums, "black-scholes premiums");
        Ok(premiums)
    }
}
