//! Date and time fields.
//!
//! Itinerary lines carry dates as `YYYY-MM-DD` and times as `HH:MM`. Both
//! are parsed strictly: fixed width, ASCII digits, calendar-valid.

use chrono::{NaiveDate, NaiveTime};

use super::FieldError;

/// Parse a time in "HH:MM" format.
///
/// # Examples
///
/// ```
/// use itinerary::parsing::parse_hhmm;
///
/// // Valid times
/// assert!(parse_hhmm("00:00").is_ok());
/// assert!(parse_hhmm("23:59").is_ok());
///
/// // Invalid formats
/// assert!(parse_hhmm("1430").is_err());
/// assert!(parse_hhmm("14:3").is_err());
/// assert!(parse_hhmm("25:00").is_err());
/// assert!(parse_hhmm("10:00:00").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, FieldError> {
    // Must be exactly 5 characters: HH:MM
    if s.len() != 5 {
        return Err(FieldError::time("expected HH:MM format"));
    }

    let bytes = s.as_bytes();
    if bytes[2] != b':' {
        return Err(FieldError::time("expected colon at position 2"));
    }

    let hour = parse_digits(&bytes[0..2]).ok_or(FieldError::time("invalid hour digits"))?;
    if hour > 23 {
        return Err(FieldError::time("hour must be 0-23"));
    }

    let minute = parse_digits(&bytes[3..5]).ok_or(FieldError::time("invalid minute digits"))?;
    if minute > 59 {
        return Err(FieldError::time("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(FieldError::time("invalid time"))
}

/// Parse a date in "YYYY-MM-DD" format.
///
/// # Examples
///
/// ```
/// use itinerary::parsing::parse_date;
///
/// assert!(parse_date("2026-01-01").is_ok());
/// assert!(parse_date("2028-02-29").is_ok());
///
/// assert!(parse_date("2026-13-01").is_err());
/// assert!(parse_date("2026-02-30").is_err());
/// assert!(parse_date("2026-1-1").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, FieldError> {
    if s.len() != 10 {
        return Err(FieldError::date("expected YYYY-MM-DD format"));
    }

    let bytes = s.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(FieldError::date("expected dashes at positions 4 and 7"));
    }

    let year = parse_digits(&bytes[0..4]).ok_or(FieldError::date("invalid year digits"))?;
    let month = parse_digits(&bytes[5..7]).ok_or(FieldError::date("invalid month digits"))?;
    if !(1..=12).contains(&month) {
        return Err(FieldError::date("month must be 1-12"));
    }
    let day = parse_digits(&bytes[8..10]).ok_or(FieldError::date("invalid day digits"))?;

    // Year has at most 4 digits, so the cast cannot overflow.
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or(FieldError::date("day does not exist in month"))
}

/// Parse ASCII digit bytes into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc * 10 + digit)
    })
}
