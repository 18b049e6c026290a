//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

use chrono::NaiveDate;

/// Test that time types are accessible via absolute path.
#[test]
fn test_time_module_exports() {
    use pricer_core::types::time::is_leap_year;
    use pricer_core::types::time::Date;
    use pricer_core::types::time::DateFormat;
    use pricer_core::types::time::LeapAdjustedDayCount;

    let trade = Date::parse_with_format("23-11-2022", &DateFormat::default()).unwrap();
    let expiry = Date::from(NaiveDate::from_ymd_opt(2023, 5, 10).unwrap());
    assert_eq!(expiry - trade, 168);

    assert!(is_leap_year(2024));
    let t = LeapAdjustedDayCount::for_year(2024).year_fraction(trade, expiry);
    assert!((t - 168.0 / 366.0).abs() < 1e-12);
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use pricer_core::types::error::DateError;
    use pricer_core::types::error::ErrorKind;
    use pricer_core::types::error::PricingError;

    let err: PricingError = DateError::Missing {
        field: "trade_date".to_string(),
    }
    .into();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

/// Test the flattened re-exports in `types`.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{Date, DateError, DateFormat, ErrorKind, PricingError};

    let iso = DateFormat::iso();
    let date = Date::parse_with_format("2023-05-10", &iso).unwrap();
    assert_eq!(date.format_with(&DateFormat::default()), "10-05-2023");

    let err = Date::parse_with_format("2023/05/10", &iso).unwrap_err();
    assert!(matches!(err, DateError::ParseError { .. }));
    assert_eq!(PricingError::from(err).kind(), ErrorKind::Parse);
}
