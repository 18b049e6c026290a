//! European option contract with validated and derived parameters.
//!
//! An [`OptionContract`] is produced only by [`OptionContractBuilder::build`],
//! which runs a fixed validation and derivation pipeline:
//!
//! 1. Resolve trade and expiry dates (date values or strings in the
//!    configured [`DateFormat`]); both are required.
//! 2. Require the expiry date to be after the trade date.
//! 3. Require non-negative spot and strike, then check the rate
//!    (0 < r <= 1), volatility (>= 0) and convenience yield (finite).
//! 4. Derive time to maturity with the leap-adjusted day count. A supplied
//!    value that disagrees is kept and reported as a [`ContractWarning`].
//! 5. Derive the continuously compounded rate constant `ln(1 + r)` unless supplied.
//! 6. Derive the forward price `S·exp(r_c·T)` unless supplied.
//!
//! The resulting contract is immutable.

use std::fmt;

use pricer_core::types::{Date, DateError, DateFormat, LeapAdjustedDayCount};
use tracing::{debug, warn};

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;
use crate::analytical::{AnalyticalError, BlackScholes, OptionPremiums};

/// Absolute tolerance when comparing a supplied time to maturity with the derived one.
const MATURITY_TOLERANCE: f64 = 1e-12;

/// Default risk-free rate when none is supplied.
const DEFAULT_RISK_FREE_RATE: f64 = 0.005;

/// A contract date given either as a date value or as an unparsed string.
///
/// # Examples
/// ```
/// use pricer_core::types::{Date, DateFormat};
/// use pricer_models::instruments::DateInput;
///
/// let text = DateInput::from("23-11-2022");
/// let value = DateInput::from(Date::from_ymd(2022, 11, 23).unwrap());
/// let format = DateFormat::default();
/// assert_eq!(text.resolve(&format).unwrap(), value.resolve(&format).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub enum DateInput {
    /// Already a calendar date.
    Value(Date),
    /// String to be parsed with the configured format.
    Text(String),
}

impl DateInput {
    /// Resolves to a date, parsing text with `format`.
    pub fn resolve(&self, format: &DateFormat) -> Result<Date, DateError> {
        match self {
            DateInput::Value(date) => Ok(*date),
            DateInput::Text(text) => Date::parse_with_format(text, format),
        }
    }
}

impl From<Date> for DateInput {
    fn from(date: Date) -> Self {
        DateInput::Value(date)
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

/// Non-fatal inconsistency detected while building a contract.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ContractWarning {
    /// The supplied time to maturity differs from the one implied by the dates.
    TimeToMaturityMismatch {
        /// Value supplied by the caller (kept on the contract)
        supplied: f64,
        /// Value derived from the trade and expiry dates
        derived: f64,
    },
}

impl fmt::Display for ContractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractWarning::TimeToMaturityMismatch { supplied, derived } => write!(
                f,
                "time_to_maturity: {} does not match calculated time_to_maturity: {}",
                supplied, derived
            ),
        }
    }
}

/// Raw, unvalidated contract fields.
///
/// Defaults: spot and strike 0, risk-free rate 0.5%, volatility 0,
/// convenience yield 0, European exercise, `DD-MM-YYYY` dates and the
/// current calendar year as day-count reference. Dates have no default.
///
/// # Examples
/// ```
/// use pricer_core::types::LeapAdjustedDayCount;
/// use pricer_models::instruments::OptionContract;
///
/// let contract = OptionContract::builder()
///     .spot_price(19.0)
///     .strike_price(17.0)
///     .trade_date("23-11-2022")
///     .expiry_date("10-05-2023")
///     .risk_free_rate(0.005)
///     .asset_volatility(0.3)
///     .day_count(LeapAdjustedDayCount::for_year(2023))
///     .build()
///     .unwrap();
///
/// assert!((contract.time_to_maturity() - 168.0 / 365.0).abs() < 1e-12);
/// assert!(contract.forward_price() > contract.spot_price());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptionContractBuilder {
    spot_price: f64,
    strike_price: f64,
    trade_date: Option<DateInput>,
    expiry_date: Option<DateInput>,
    time_to_maturity: Option<f64>,
    risk_free_rate: f64,
    risk_free_rate_constant: Option<f64>,
    forward_price: Option<f64>,
    asset_volatility: f64,
    convenience_yield: f64,
    is_european: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    date_format: DateFormat,
    #[cfg_attr(feature = "serde", serde(skip))]
    day_count: Option<LeapAdjustedDayCount>,
}

impl Default for OptionContractBuilder {
    fn default() -> Self {
        Self {
            spot_price: 0.0,
            strike_price: 0.0,
            trade_date: None,
            expiry_date: None,
            time_to_maturity: None,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            risk_free_rate_constant: None,
            forward_price: None,
            asset_volatility: 0.0,
            convenience_yield: 0.0,
            is_european: true,
            date_format: DateFormat::default(),
            day_count: None,
        }
    }
}

impl OptionContractBuilder {
    /// Creates a builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spot price.
    pub fn spot_price(mut self, spot_price: f64) -> Self {
        self.spot_price = spot_price;
        self
    }

    /// Sets the strike price.
    pub fn strike_price(mut self, strike_price: f64) -> Self {
        self.strike_price = strike_price;
        self
    }

    /// Sets the trade date (date value or string).
    pub fn trade_date(mut self, trade_date: impl Into<DateInput>) -> Self {
        self.trade_date = Some(trade_date.into());
        self
    }

    /// Sets the expiry date (date value or string).
    pub fn expiry_date(mut self, expiry_date: impl Into<DateInput>) -> Self {
        self.expiry_date = Some(expiry_date.into());
        self
    }

    /// Supplies an explicit time to maturity instead of deriving it.
    pub fn time_to_maturity(mut self, time_to_maturity: f64) -> Self {
        self.time_to_maturity = Some(time_to_maturity);
        self
    }

    /// Sets the annual risk-free rate.
    pub fn risk_free_rate(mut self, risk_free_rate: f64) -> Self {
        self.risk_free_rate = risk_free_rate;
        self
    }

    /// Supplies the continuously compounded rate constant instead of deriving it.
    pub fn risk_free_rate_constant(mut self, constant: f64) -> Self {
        self.risk_free_rate_constant = Some(constant);
        self
    }

    /// Supplies the forward price instead of deriving it.
    pub fn forward_price(mut self, forward_price: f64) -> Self {
        self.forward_price = Some(forward_price);
        self
    }

    /// Sets the asset volatility.
    pub fn asset_volatility(mut self, asset_volatility: f64) -> Self {
        self.asset_volatility = asset_volatility;
        self
    }

    /// Sets the convenience yield.
    pub fn convenience_yield(mut self, convenience_yield: f64) -> Self {
        self.convenience_yield = convenience_yield;
        self
    }

    /// Marks the contract as European (`true`) or American (`false`).
    pub fn is_european(mut self, is_european: bool) -> Self {
        self.is_european = is_european;
        self
    }

    /// Sets the format used to parse string dates.
    pub fn date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Pins the day-count reference year.
    pub fn day_count(mut self, day_count: LeapAdjustedDayCount) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// Validates the fields and derives the dependent ones.
    ///
    /// # Errors
    /// - `InstrumentError::Date` if a date is missing or malformed
    /// - `InstrumentError::ExpiryNotAfterTrade` if expiry <= trade date
    /// - `InstrumentError::NegativeValue` for negative spot, strike,
    ///   volatility or supplied time to maturity
    /// - `InstrumentError::RiskFreeRateOutOfRange` unless 0 < r <= 1
    /// - `InstrumentError::NonPositiveValue` for a supplied rate constant or
    ///   forward price <= 0
    /// - `InstrumentError::NonFinite` for NaN or infinite inputs
    pub fn build(self) -> Result<OptionContract, InstrumentError> {
        let trade_date = resolve_date(self.trade_date.as_ref(), "trade_date", &self.date_format)?;
        let expiry_date =
            resolve_date(self.expiry_date.as_ref(), "expiry_date", &self.date_format)?;

        if expiry_date <= trade_date {
            return Err(InstrumentError::ExpiryNotAfterTrade {
                trade_date,
                expiry_date,
            });
        }

        let spot_price = non_negative("spot_price", self.spot_price)?;
        let strike_price = non_negative("strike_price", self.strike_price)?;

        let risk_free_rate = finite("risk_free_rate", self.risk_free_rate)?;
        if risk_free_rate <= 0.0 || risk_free_rate > 1.0 {
            return Err(InstrumentError::RiskFreeRateOutOfRange {
                rate: risk_free_rate,
            });
        }
        let asset_volatility = non_negative("asset_volatility", self.asset_volatility)?;
        let convenience_yield = finite("convenience_yield", self.convenience_yield)?;

        let day_count = self.day_count.unwrap_or_else(LeapAdjustedDayCount::current);
        let derived_maturity = day_count.year_fraction(trade_date, expiry_date);
        let mut warnings = Vec::new();
        let time_to_maturity = match self.time_to_maturity {
            None => derived_maturity,
            Some(supplied) => {
                let supplied = non_negative("time_to_maturity", supplied)?;
                if (supplied - derived_maturity).abs() > MATURITY_TOLERANCE {
                    let warning = ContractWarning::TimeToMaturityMismatch {
                        supplied,
                        derived: derived_maturity,
                    };
                    warn!(%warning, "please check if this is desired");
                    warnings.push(warning);
                }
                supplied
            }
        };

        let risk_free_rate_constant = match self.risk_free_rate_constant {
            Some(constant) => positive("risk_free_rate_constant", constant)?,
            None => (1.0 + risk_free_rate).ln(),
        };

        let forward_price = match self.forward_price {
            Some(forward) => positive("forward_price", forward)?,
            None => spot_price * (risk_free_rate_constant * time_to_maturity).exp(),
        };

        debug!(
            %trade_date,
            %expiry_date,
            %day_count,
            time_to_maturity,
            risk_free_rate_constant,
            forward_price,
            "option contract derived"
        );

        Ok(OptionContract {
            spot_price,
            strike_price,
            trade_date,
            expiry_date,
            time_to_maturity,
            risk_free_rate,
            risk_free_rate_constant,
            forward_price,
            asset_volatility,
            convenience_yield,
            exercise: ExerciseStyle::from(self.is_european),
            warnings,
        })
    }
}

fn resolve_date(
    input: Option<&DateInput>,
    field: &str,
    format: &DateFormat,
) -> Result<Date, DateError> {
    input
        .ok_or_else(|| DateError::Missing {
            field: field.to_string(),
        })?
        .resolve(format)
}

fn finite(field: &'static str, value: f64) -> Result<f64, InstrumentError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InstrumentError::NonFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, InstrumentError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(InstrumentError::NegativeValue { field, value });
    }
    Ok(value)
}

fn positive(field: &'static str, value: f64) -> Result<f64, InstrumentError> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(InstrumentError::NonPositiveValue { field, value });
    }
    Ok(value)
}

/// Validated option contract.
///
/// All derived fields are populated; the value cannot be mutated after
/// construction. `convenience_yield` is validated and carried but no current
/// formula consumes it; it is reserved for a cost-of-carry pricing variant.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionContract {
    spot_price: f64,
    strike_price: f64,
    trade_date: Date,
    expiry_date: Date,
    time_to_maturity: f64,
    risk_free_rate: f64,
    risk_free_rate_constant: f64,
    forward_price: f64,
    asset_volatility: f64,
    convenience_yield: f64,
    exercise: ExerciseStyle,
    warnings: Vec<ContractWarning>,
}

impl OptionContract {
    /// Starts building a contract.
    pub fn builder() -> OptionContractBuilder {
        OptionContractBuilder::new()
    }

    /// Spot price (S).
    #[inline]
    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    /// Strike price (K).
    #[inline]
    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Trade date.
    #[inline]
    pub fn trade_date(&self) -> Date {
        self.trade_date
    }

    /// Expiry date.
    #[inline]
    pub fn expiry_date(&self) -> Date {
        self.expiry_date
    }

    /// Time to maturity in years (T).
    #[inline]
    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    /// Annual risk-free rate (r).
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Continuously compounded rate constant (r_c).
    #[inline]
    pub fn risk_free_rate_constant(&self) -> f64 {
        self.risk_free_rate_constant
    }

    /// Forward price (F).
    #[inline]
    pub fn forward_price(&self) -> f64 {
        self.forward_price
    }

    /// Asset volatility (σ).
    #[inline]
    pub fn asset_volatility(&self) -> f64 {
        self.asset_volatility
    }

    /// Convenience yield.
    #[inline]
    pub fn convenience_yield(&self) -> f64 {
        self.convenience_yield
    }

    /// Exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        self.exercise
    }

    /// Returns true if the contract is European.
    #[inline]
    pub fn is_european(&self) -> bool {
        self.exercise.is_european()
    }

    /// Non-fatal inconsistencies found during construction.
    pub fn warnings(&self) -> &[ContractWarning] {
        &self.warnings
    }

    /// Black-Scholes pricer over this contract.
    pub fn pricer(&self) -> BlackScholes<'_> {
        BlackScholes::new(self)
    }

    /// Prices the contract; see [`BlackScholes::price_all`].
    pub fn price_all(&self) -> Result<OptionPremiums, AnalyticalError> {
        self.pricer().price_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_builder() -> OptionContractBuilder {
        OptionContract::builder()
            .spot_price(19.0)
            .strike_price(17.0)
            .trade_date("23-11-2022")
            .expiry_date("10-05-2023")
            .risk_free_rate(0.005)
            .asset_volatility(0.3)
            .convenience_yield(0.0)
            .day_count(LeapAdjustedDayCount::for_year(2023))
    }

    #[test]
    fn test_derived_fields() {
        let contract = reference_builder().build().unwrap();

        assert_relative_eq!(contract.time_to_maturity(), 168.0 / 365.0, epsilon = 1e-15);
        assert_relative_eq!(
            contract.risk_free_rate_constant(),
            1.005_f64.ln(),
            epsilon = 1e-15
        );
        let expected_forward = 19.0 * (1.005_f64.ln() * 168.0 / 365.0).exp();
        assert_relative_eq!(contract.forward_price(), expected_forward, epsilon = 1e-12);
        assert!(contract.warnings().is_empty());
        assert!(contract.is_european());
    }

    #[test]
    fn test_time_to_maturity_rounding() {
        let contract = reference_builder().build().unwrap();
        assert_eq!((contract.time_to_maturity() * 1000.0).round() / 1000.0, 0.460);

        let leap = OptionContract::builder()
            .trade_date("23-11-2023")
            .expiry_date("10-05-2024")
            .risk_free_rate(0.5)
            .asset_volatility(0.3)
            .day_count(LeapAdjustedDayCount::for_year(2023))
            .build()
            .unwrap();
        assert_eq!((leap.time_to_maturity() * 1000.0).round() / 1000.0, 0.463);
    }

    #[test]
    fn test_leap_reference_year_changes_denominator() {
        let contract = reference_builder()
            .day_count(LeapAdjustedDayCount::for_year(2024))
            .build()
            .unwrap();
        assert_relative_eq!(contract.time_to_maturity(), 168.0 / 366.0, epsilon = 1e-15);
    }

    #[test]
    fn test_date_values_and_strings_are_equivalent() {
        let from_values = reference_builder()
            .trade_date(Date::from_ymd(2022, 11, 23).unwrap())
            .expiry_date(Date::from_ymd(2023, 5, 10).unwrap())
            .build()
            .unwrap();
        let from_strings = reference_builder().build().unwrap();
        assert_eq!(from_values, from_strings);
    }

    #[test]
    fn test_malformed_date_reports_value_and_format() {
        let err = reference_builder()
            .trade_date("2022-11-23")
            .build()
            .unwrap_err();
        match err {
            InstrumentError::Date(DateError::ParseError { value, format }) => {
                assert_eq!(value, "2022-11-23");
                assert_eq!(format, "DD-MM-YYYY");
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_short_or_signed_year_is_rejected() {
        for bad in ["23-11-22", "23-11-+2022"] {
            let err = reference_builder().trade_date(bad).build().unwrap_err();
            assert!(
                matches!(err, InstrumentError::Date(DateError::ParseError { ref value, .. }) if value == bad),
                "expected ParseError for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_custom_date_format() {
        let contract = reference_builder()
            .date_format(DateFormat::iso())
            .trade_date("2022-11-23")
            .expiry_date("2023-05-10")
            .build()
            .unwrap();
        assert_eq!(contract.trade_date(), Date::from_ymd(2022, 11, 23).unwrap());
    }

    #[test]
    fn test_missing_dates_fail() {
        let err = OptionContract::builder()
            .expiry_date("10-05-2023")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            InstrumentError::Date(DateError::Missing {
                field: "trade_date".to_string()
            })
        );

        let err = OptionContract::builder()
            .trade_date("23-11-2022")
            .build()
            .unwrap_err();
        assert!(matches!(err, InstrumentError::Date(DateError::Missing { .. })));
    }

    #[test]
    fn test_expiry_on_or_before_trade_fails() {
        let same_day = reference_builder().expiry_date("23-11-2022").build();
        assert!(matches!(
            same_day,
            Err(InstrumentError::ExpiryNotAfterTrade { .. })
        ));

        let reversed = reference_builder()
            .trade_date("10-05-2023")
            .expiry_date("23-11-2022")
            .build();
        assert!(matches!(
            reversed,
            Err(InstrumentError::ExpiryNotAfterTrade { .. })
        ));
    }

    #[test]
    fn test_date_order_checked_before_prices() {
        let err = reference_builder()
            .spot_price(-1.0)
            .expiry_date("01-01-2020")
            .build()
            .unwrap_err();
        assert!(matches!(err, InstrumentError::ExpiryNotAfterTrade { .. }));
    }

    #[test]
    fn test_negative_prices_fail() {
        let err = reference_builder().spot_price(-19.0).build().unwrap_err();
        assert_eq!(
            err,
            InstrumentError::NegativeValue {
                field: "spot_price",
                value: -19.0
            }
        );

        let err = reference_builder().strike_price(-17.0).build().unwrap_err();
        assert_eq!(
            err,
            InstrumentError::NegativeValue {
                field: "strike_price",
                value: -17.0
            }
        );
    }

    #[test]
    fn test_zero_prices_are_valid() {
        let contract = reference_builder()
            .spot_price(0.0)
            .strike_price(0.0)
            .build()
            .unwrap();
        assert_eq!(contract.forward_price(), 0.0);
    }

    #[test]
    fn test_risk_free_rate_bounds() {
        for rate in [0.0, -0.01, 1.01] {
            let err = reference_builder().risk_free_rate(rate).build().unwrap_err();
            assert_eq!(err, InstrumentError::RiskFreeRateOutOfRange { rate });
        }
        assert!(reference_builder().risk_free_rate(1.0).build().is_ok());
    }

    #[test]
    fn test_negative_volatility_fails() {
        let err = reference_builder().asset_volatility(-0.3).build().unwrap_err();
        assert!(matches!(
            err,
            InstrumentError::NegativeValue {
                field: "asset_volatility",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_inputs_fail() {
        let err = reference_builder().spot_price(f64::NAN).build().unwrap_err();
        assert!(matches!(
            err,
            InstrumentError::NonFinite {
                field: "spot_price",
                ..
            }
        ));
        let err = reference_builder()
            .convenience_yield(f64::INFINITY)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            InstrumentError::NonFinite {
                field: "convenience_yield",
                ..
            }
        ));
    }

    #[test]
    fn test_supplied_time_to_maturity_mismatch_warns() {
        let contract = reference_builder().time_to_maturity(0.5).build().unwrap();

        assert_eq!(contract.time_to_maturity(), 0.5);
        assert_eq!(contract.warnings().len(), 1);
        match &contract.warnings()[0] {
            ContractWarning::TimeToMaturityMismatch { supplied, derived } => {
                assert_eq!(*supplied, 0.5);
                assert_relative_eq!(*derived, 168.0 / 365.0, epsilon = 1e-15);
            }
        }
        assert!(contract.warnings()[0]
            .to_string()
            .contains("does not match calculated time_to_maturity"));
    }

    #[test]
    fn test_supplied_time_to_maturity_matching_does_not_warn() {
        let contract = reference_builder()
            .time_to_maturity(168.0 / 365.0)
            .build()
            .unwrap();
        assert!(contract.warnings().is_empty());
    }

    #[test]
    fn test_supplied_rate_constant_and_forward_are_kept() {
        let contract = reference_builder()
            .risk_free_rate_constant(0.01)
            .forward_price(20.0)
            .build()
            .unwrap();
        assert_eq!(contract.risk_free_rate_constant(), 0.01);
        assert_eq!(contract.forward_price(), 20.0);
    }

    #[test]
    fn test_supplied_rate_constant_feeds_forward_derivation() {
        let contract = reference_builder()
            .risk_free_rate_constant(0.02)
            .build()
            .unwrap();
        let expected = 19.0 * (0.02 * contract.time_to_maturity()).exp();
        assert_relative_eq!(contract.forward_price(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_supplied_derivations_fail() {
        let err = reference_builder()
            .risk_free_rate_constant(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            InstrumentError::NonPositiveValue {
                field: "risk_free_rate_constant",
                ..
            }
        ));

        let err = reference_builder().forward_price(-1.0).build().unwrap_err();
        assert!(matches!(
            err,
            InstrumentError::NonPositiveValue {
                field: "forward_price",
                ..
            }
        ));
    }

    #[test]
    fn test_convenience_yield_is_carried() {
        let contract = reference_builder().convenience_yield(0.02).build().unwrap();
        assert_eq!(contract.convenience_yield(), 0.02);
    }

    #[test]
    fn test_american_flag() {
        let contract = reference_builder().is_european(false).build().unwrap();
        assert!(!contract.is_european());
        assert_eq!(contract.exercise_style(), ExerciseStyle::American);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_builder_deserialises_with_defaults() {
        let json = r#"{
            "spot_price": 19.0,
            "strike_price": 17.0,
            "trade_date": "23-11-2022",
            "expiry_date": "10-05-2023",
            "asset_volatility": 0.3
        }"#;
        let builder: OptionContractBuilder = serde_json::from_str(json).unwrap();
        let contract = builder
            .day_count(LeapAdjustedDayCount::for_year(2023))
            .build()
            .unwrap();
        assert_eq!(contract.risk_free_rate(), 0.005);
        assert!(contract.is_european());
        assert_eq!(contract, reference_builder().build().unwrap());
    }
}
