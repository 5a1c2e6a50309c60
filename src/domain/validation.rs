//! Input validators for user identifiers and birthdays.
//!
//! Pure functions that normalize raw input into canonical typed values
//! or a typed rejection from the closed error taxonomy. The birthday
//! validator is deterministic given a fixed "now"; tests use the `_at`
//! variant to avoid flakiness at the future-date boundary.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::config::{BIRTHDAY_FORMAT, MIN_BIRTHDAY_YEAR};
use crate::errors::{AppError, AppResult};

/// Anchored DD/MM/YYYY pattern: zero-padded day 01-31, month 01-12,
/// four-digit year. Calendar validity is checked separately.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12]\d|3[01])/(0[1-9]|1[0-2])/(\d{4})$")
        .unwrap_or_else(|e| panic!("invalid birthday pattern: {e}"))
});

/// Validate a raw user identifier.
///
/// Absent or null input is `IdRequired`. JSON numbers and numeric
/// strings are coerced; anything that does not coerce to a positive
/// integer is `IdNotPositiveInteger`.
pub fn validate_user_id(raw: Option<&Value>) -> AppResult<i64> {
    let value = match raw {
        None | Some(Value::Null) => return Err(AppError::IdRequired),
        Some(v) => v,
    };

    let id = coerce_integer(value).ok_or(AppError::IdNotPositiveInteger)?;
    if id <= 0 {
        return Err(AppError::IdNotPositiveInteger);
    }

    Ok(id)
}

/// Validate a user identifier taken from a URL path segment.
pub fn validate_path_id(raw: &str) -> AppResult<i64> {
    let value = Value::String(raw.to_string());
    validate_user_id(Some(&value))
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

/// Validate a raw birthday against a fixed current instant.
///
/// Rejects non-strings and strings outside the DD/MM/YYYY pattern with
/// `BadDateFormat`, impossible calendar dates (31/04, 29/02 outside
/// leap years) with `BadDateFormat`, dates after `now` with
/// `FutureDate` and dates before 1900-01-01 with `DateTooOld`. On
/// success returns the UTC-midnight instant.
pub fn validate_birthday_at(raw: &Value, now: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
    let text = raw.as_str().ok_or(AppError::BadDateFormat)?;

    let captures = BIRTHDAY_PATTERN
        .captures(text)
        .ok_or(AppError::BadDateFormat)?;

    let day: u32 = captures[1].parse().map_err(|_| AppError::BadDateFormat)?;
    let month: u32 = captures[2].parse().map_err(|_| AppError::BadDateFormat)?;
    let year: i32 = captures[3].parse().map_err(|_| AppError::BadDateFormat)?;

    // Round-trip through calendar construction; chrono rejects days
    // that do not exist in the given month.
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(AppError::BadDateFormat)?;
    let birthday = date
        .and_hms_opt(0, 0, 0)
        .ok_or(AppError::BadDateFormat)?
        .and_utc();

    if birthday > now {
        return Err(AppError::FutureDate);
    }

    let min = Utc
        .with_ymd_and_hms(MIN_BIRTHDAY_YEAR, 1, 1, 0, 0, 0)
        .single()
        .ok_or(AppError::BadDateFormat)?;
    if birthday < min {
        return Err(AppError::DateTooOld);
    }

    Ok(birthday)
}

/// Validate a raw birthday against the current instant.
pub fn validate_birthday(raw: &Value) -> AppResult<DateTime<Utc>> {
    validate_birthday_at(raw, Utc::now())
}

/// Render a stored birthday in its DD/MM/YYYY display form.
pub fn format_birthday(date: DateTime<Utc>) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}
