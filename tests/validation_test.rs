//! Validator unit tests.
//!
//! Birthday checks run against a fixed "now" so the future-date
//! boundary cannot flake.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use users_service::domain::{
    format_birthday, validate_birthday_at, validate_path_id, validate_user_id,
};
use users_service::errors::AppError;

fn fixed_now() -> chrono::DateTime<chrono::Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

// =============================================================================
// User ID validation
// =============================================================================

#[test]
fn test_user_id_absent_is_required() {
    let result = validate_user_id(None);
    assert!(matches!(result.unwrap_err(), AppError::IdRequired));

    let null = Value::Null;
    let result = validate_user_id(Some(&null));
    assert!(matches!(result.unwrap_err(), AppError::IdRequired));
}

#[test]
fn test_user_id_accepts_positive_integers() {
    let id = json!(123123);
    assert_eq!(validate_user_id(Some(&id)).unwrap(), 123123);

    // Numeric strings coerce, matching the path-parameter case
    let id = json!("999999");
    assert_eq!(validate_user_id(Some(&id)).unwrap(), 999999);
}

#[test]
fn test_user_id_rejects_non_positive_values() {
    for raw in [json!(0), json!(-5), json!("-17"), json!("0")] {
        let result = validate_user_id(Some(&raw));
        assert!(
            matches!(result.unwrap_err(), AppError::IdNotPositiveInteger),
            "expected rejection for {raw}"
        );
    }
}

#[test]
fn test_user_id_rejects_non_integers() {
    for raw in [
        json!(2.5),
        json!("12.5"),
        json!("abc"),
        json!(""),
        json!(true),
        json!([1]),
        json!({"id": 1}),
    ] {
        let result = validate_user_id(Some(&raw));
        assert!(
            matches!(result.unwrap_err(), AppError::IdNotPositiveInteger),
            "expected rejection for {raw}"
        );
    }
}

#[test]
fn test_path_id_parses_strings() {
    assert_eq!(validate_path_id("123123").unwrap(), 123123);
    assert!(matches!(
        validate_path_id("abc").unwrap_err(),
        AppError::IdNotPositiveInteger
    ));
    assert!(matches!(
        validate_path_id("-1").unwrap_err(),
        AppError::IdNotPositiveInteger
    ));
}

// =============================================================================
// Birthday validation
// =============================================================================

#[test]
fn test_birthday_valid_date_normalizes_to_utc_midnight() {
    let raw = json!("01/01/1990");
    let parsed = validate_birthday_at(&raw, fixed_now()).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_birthday_rejects_wrong_format() {
    for raw in [
        json!("1990-01-01"),  // ISO order/separator
        json!("5/1/1990"),    // not zero-padded
        json!("01/01/90"),    // two-digit year
        json!("32/01/1990"),  // day out of pattern range
        json!("01/13/1990"),  // month out of pattern range
        json!("01011990"),
        json!(""),
        json!(19900101),      // not a string
        json!(null),
    ] {
        let result = validate_birthday_at(&raw, fixed_now());
        assert!(
            matches!(result.unwrap_err(), AppError::BadDateFormat),
            "expected format rejection for {raw}"
        );
    }
}

#[test]
fn test_birthday_rejects_impossible_calendar_dates() {
    // Day 31 in a 30-day month
    let raw = json!("31/04/2000");
    assert!(matches!(
        validate_birthday_at(&raw, fixed_now()).unwrap_err(),
        AppError::BadDateFormat
    ));

    // 29 February outside a leap year
    let raw = json!("29/02/2023");
    assert!(matches!(
        validate_birthday_at(&raw, fixed_now()).unwrap_err(),
        AppError::BadDateFormat
    ));

    // Leap day in a leap year is fine
    let raw = json!("29/02/2024");
    assert!(validate_birthday_at(&raw, fixed_now()).is_ok());
}

#[test]
fn test_birthday_future_date_boundary() {
    // Tomorrow relative to the fixed clock
    let raw = json!("16/06/2024");
    assert!(matches!(
        validate_birthday_at(&raw, fixed_now()).unwrap_err(),
        AppError::FutureDate
    ));

    // Today at midnight is not in the future at noon
    let raw = json!("15/06/2024");
    assert!(validate_birthday_at(&raw, fixed_now()).is_ok());
}

#[test]
fn test_birthday_minimum_date_boundary() {
    let raw = json!("31/12/1899");
    assert!(matches!(
        validate_birthday_at(&raw, fixed_now()).unwrap_err(),
        AppError::DateTooOld
    ));

    let raw = json!("01/01/1900");
    assert!(validate_birthday_at(&raw, fixed_now()).is_ok());
}

#[test]
fn test_birthday_display_round_trip() {
    let raw = json!("07/03/1985");
    let parsed = validate_birthday_at(&raw, fixed_now()).unwrap();
    assert_eq!(format_birthday(parsed), "07/03/1985");
}
