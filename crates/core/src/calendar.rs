//! Calendar/clock helpers: epoch-minute counters and UTC bucket floors.
//!
//! All counters are whole minutes since the Unix epoch (1970-01-01 00:00 UTC).
//! Conversion floors with `div_euclid`, so instants before the epoch land in
//! the bucket that contains them rather than the one after.
//!
//! Arithmetic that would leave chrono's representable range saturates at
//! [`DateTime::<Utc>::MIN_UTC`] / [`DateTime::<Utc>::MAX_UTC`].

use chrono::{DateTime, Datelike, Days, Months, NaiveTime, TimeDelta, Utc, Weekday};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
pub const MINUTES_PER_WEEK: i64 = 7 * MINUTES_PER_DAY;

/// Start of week zero: Monday 1970-01-05 00:00 UTC, four days after the epoch.
///
/// Week buckets run on a fixed 10080-minute cadence from this anchor.
pub const WEEK_ANCHOR_MINUTES: i64 = 4 * MINUTES_PER_DAY;

/// Whole minutes since the epoch for `at`.
pub fn to_epoch_minutes(at: DateTime<Utc>) -> i64 {
    at.timestamp().div_euclid(SECONDS_PER_MINUTE)
}

/// The instant `minutes` after the epoch.
pub fn from_epoch_minutes(minutes: i64) -> DateTime<Utc> {
    let seconds = minutes.saturating_mul(SECONDS_PER_MINUTE);
    DateTime::from_timestamp(seconds, 0).unwrap_or_else(|| saturate(minutes))
}

/// Day of the week `at` falls on.
pub fn day_of_week(at: DateTime<Utc>) -> Weekday {
    at.weekday()
}

/// Largest multiple of `unit` minutes (offset by `anchor`) not after `minutes`.
pub fn floor_minutes(minutes: i64, unit: i64, anchor: i64) -> i64 {
    anchor + (minutes - anchor).div_euclid(unit) * unit
}

pub fn floor_to_hour(at: DateTime<Utc>) -> i64 {
    floor_minutes(to_epoch_minutes(at), MINUTES_PER_HOUR, 0)
}

pub fn floor_to_day(at: DateTime<Utc>) -> i64 {
    floor_minutes(to_epoch_minutes(at), MINUTES_PER_DAY, 0)
}

/// Most recent Monday midnight at or before `at`.
pub fn floor_to_week(at: DateTime<Utc>) -> i64 {
    floor_minutes(to_epoch_minutes(at), MINUTES_PER_WEEK, WEEK_ANCHOR_MINUTES)
}

/// Midnight on the first day of `at`'s calendar month.
pub fn floor_to_month(at: DateTime<Utc>) -> DateTime<Utc> {
    let first = at.date_naive() - Days::new(u64::from(at.day0()));
    first.and_time(NaiveTime::MIN).and_utc()
}

pub fn add_minutes(at: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    TimeDelta::try_minutes(minutes)
        .and_then(|delta| at.checked_add_signed(delta))
        .unwrap_or_else(|| saturate(minutes))
}

pub fn add_days(at: DateTime<Utc>, days: u64) -> DateTime<Utc> {
    at.checked_add_days(Days::new(days))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

pub fn sub_days(at: DateTime<Utc>, days: u64) -> DateTime<Utc> {
    at.checked_sub_days(Days::new(days))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Add `months` calendar months, clamping the day to the target month's length.
pub fn add_months(at: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    at.checked_add_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Subtract `months` calendar months, clamping the day to the target month's length.
pub fn sub_months(at: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    at.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn saturate(direction: i64) -> DateTime<Utc> {
    if direction < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    }
}
