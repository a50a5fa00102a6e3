//! Wall-clock helpers.
//!
//! Itinerary times are written as local wall-clock values and interpreted
//! in a single IANA time zone. These helpers turn them into absolute,
//! zone-aware timestamps.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Resolve a local wall-clock time in `tz`.
///
/// Ambiguous times (clocks going back) resolve to the earliest instant.
/// Returns `None` for times skipped by a DST transition.
///
/// # Examples
///
/// ```
/// use itinerary::domain::localize;
/// use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2026, 1, 1)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let local = localize(chrono_tz::Europe::Madrid, dt).unwrap();
/// assert_eq!(local.to_rfc3339(), "2026-01-01T10:00:00+01:00");
///
/// // 02:30 does not exist on the spring-forward night
/// let gap = NaiveDate::from_ymd_opt(2026, 3, 29)
///     .unwrap()
///     .and_hms_opt(2, 30, 0)
///     .unwrap();
/// assert!(localize(chrono_tz::Europe::Madrid, gap).is_none());
/// ```
pub fn localize(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&local).earliest()
}

const MINUTES_PER_DAY: i64 = 24 * 60;

/// First instant of `date` in `tz`.
///
/// Usually midnight. When a DST jump skips midnight (America/Santiago
/// moves from 00:00 straight to 01:00), the first wall-clock minute that
/// exists is used instead. `None` only if the whole day was skipped.
pub fn start_of_day(tz: Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..MINUTES_PER_DAY).find_map(|m| localize(tz, midnight + Duration::minutes(m)))
}

/// Last second (23:59:59) of `date` in `tz`, stepping back a minute at a
/// time if that wall-clock time was skipped.
pub fn end_of_day(tz: Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    let last = date.and_time(NaiveTime::from_hms_opt(23, 59, 59)?);
    (0..MINUTES_PER_DAY).find_map(|m| localize(tz, last - Duration::minutes(m)))
}
