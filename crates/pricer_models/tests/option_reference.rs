//! End-to-end option pricing against reference values.

use approx::assert_relative_eq;
use pricer_core::types::{DateError, ErrorKind, LeapAdjustedDayCount, PricingError};
use pricer_models::analytical::{AnalyticalError, BlackScholes};
use pricer_models::instruments::{ContractWarning, InstrumentError, OptionContract};
use proptest::prelude::*;

fn round_to(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * scale).round() / scale
}

fn reference_contract() -> OptionContract {
    OptionContract::builder()
        .spot_price(19.0)
        .strike_price(17.0)
        .trade_date("23-11-2022")
        .expiry_date("10-05-2023")
        .risk_free_rate(0.005)
        .asset_volatility(0.3)
        .convenience_yield(0.0)
        .day_count(LeapAdjustedDayCount::for_year(2023))
        .build()
        .unwrap()
}

#[test]
fn reference_time_to_maturity() {
    let contract = reference_contract();
    assert_eq!(round_to(contract.time_to_maturity(), 3), 0.460);
}

#[test]
fn leap_year_time_to_maturity() {
    let contract = OptionContract::builder()
        .trade_date("23-11-2023")
        .expiry_date("10-05-2024")
        .risk_free_rate(0.5)
        .asset_volatility(0.3)
        .day_count(LeapAdjustedDayCount::for_year(2023))
        .build()
        .unwrap();
    assert_eq!(round_to(contract.time_to_maturity(), 3), 0.463);
}

#[test]
fn reference_deltas() {
    let contract = reference_contract();
    let bs = BlackScholes::new(&contract);
    let deltas = bs.spot_deltas(19.0).unwrap();
    assert_eq!(round_to(deltas.d1, 5), 0.65953);
    assert_eq!(round_to(deltas.d2, 5), 0.45600);
}

#[test]
fn reference_premiums() {
    let premiums = reference_contract().price_all().unwrap();
    assert_eq!(round_to(premiums.call_spot_price, 5), 2.69688);
    assert_eq!(round_to(premiums.call_forward_price, 5), 2.69688);
    assert_eq!(round_to(premiums.put_forward_price, 5), 0.65790);
    assert_eq!(round_to(premiums.put_call_parity, 5), 0.65790);
}

#[test]
fn non_european_pricing_fails_as_computation_error() {
    let contract = OptionContract::builder()
        .spot_price(19.0)
        .strike_price(17.0)
        .trade_date("23-11-2022")
        .expiry_date("10-05-2023")
        .asset_volatility(0.3)
        .is_european(false)
        .build()
        .unwrap();
    let err = contract.price_all().unwrap_err();
    assert!(matches!(err, AnalyticalError::UnsupportedExerciseStyle { .. }));
    assert_eq!(PricingError::from(err).kind(), ErrorKind::Computation);
}

#[test]
fn invalid_contracts_fail_at_construction() {
    let negative_spot = OptionContract::builder()
        .spot_price(-1.0)
        .trade_date("23-11-2022")
        .expiry_date("10-05-2023")
        .build()
        .unwrap_err();
    assert_eq!(negative_spot.kind(), ErrorKind::Validation);

    let reversed = OptionContract::builder()
        .trade_date("10-05-2023")
        .expiry_date("23-11-2022")
        .build()
        .unwrap_err();
    assert!(matches!(reversed, InstrumentError::ExpiryNotAfterTrade { .. }));

    let bad_format = OptionContract::builder()
        .trade_date("2022/11/23")
        .expiry_date("10-05-2023")
        .build()
        .unwrap_err();
    assert!(matches!(
        bad_format,
        InstrumentError::Date(DateError::ParseError { .. })
    ));
    assert_eq!(PricingError::from(bad_format).kind(), ErrorKind::Parse);
}

#[test]
fn zero_volatility_builds_but_delta_fails() {
    let contract = OptionContract::builder()
        .spot_price(19.0)
        .strike_price(17.0)
        .trade_date("23-11-2022")
        .expiry_date("10-05-2023")
        .build()
        .unwrap();
    assert_eq!(contract.asset_volatility(), 0.0);
    assert!(matches!(
        BlackScholes::new(&contract).spot_delta_one(19.0),
        Err(AnalyticalError::ZeroVolatility { .. })
    ));
}

#[test]
fn maturity_mismatch_is_a_warning() {
    let contract = OptionContract::builder()
        .spot_price(19.0)
        .strike_price(17.0)
        .trade_date("23-11-2022")
        .expiry_date("10-05-2023")
        .time_to_maturity(0.25)
        .asset_volatility(0.3)
        .day_count(LeapAdjustedDayCount::for_year(2023))
        .build()
        .unwrap();
    assert_eq!(contract.time_to_maturity(), 0.25);
    assert!(matches!(
        contract.warnings(),
        [ContractWarning::TimeToMaturityMismatch { .. }]
    ));
    assert!(contract.price_all().is_ok());
}

proptest! {
    #[test]
    fn delta_two_is_d1_minus_vol_sqrt_t(
        spot in 1.0f64..500.0,
        strike in 1.0f64..500.0,
        vol in 0.01f64..2.0,
        rate in 0.001f64..1.0,
    ) {
        let contract = OptionContract::builder()
            .spot_price(spot)
            .strike_price(strike)
            .trade_date("23-11-2022")
            .expiry_date("10-05-2023")
            .risk_free_rate(rate)
            .asset_volatility(vol)
            .day_count(LeapAdjustedDayCount::for_year(2023))
            .build()
            .unwrap();
        let bs = BlackScholes::new(&contract);
        let d1 = bs.spot_delta_one(spot).unwrap();
        prop_assert_eq!(bs.delta_two(d1), d1 - vol * contract.time_to_maturity().sqrt());
    }

    #[test]
    fn parity_put_matches_forward_put(
        spot in 1.0f64..200.0,
        strike in 1.0f64..200.0,
        vol in 0.05f64..1.0,
    ) {
        let contract = OptionContract::builder()
            .spot_price(spot)
            .strike_price(strike)
            .trade_date("23-11-2022")
            .expiry_date("10-05-2023")
            .asset_volatility(vol)
            .day_count(LeapAdjustedDayCount::for_year(2023))
            .build()
            .unwrap();
        let premiums = contract.price_all().unwrap();
        assert_relative_eq!(
            premiums.put_forward_price,
            premiums.put_call_parity,
            epsilon = 1e-9 * (spot + strike)
        );
        prop_assert!(premiums.call_forward_price >= -1e-12);
    }
}
