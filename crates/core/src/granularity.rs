//! Granularity: the bucket size of an anomaly-detection analysis window.
//!
//! Boundaries are expressed as whole minutes since the Unix epoch (see
//! [`crate::calendar`]). Hour, day and week buckets sit on fixed minute
//! cadences; month buckets follow the real calendar, so the 43800-minute
//! figure is only an approximation used for sizing, never for alignment.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::{self, MINUTES_PER_DAY, MINUTES_PER_HOUR, MINUTES_PER_WEEK};
use crate::config::LookbackIntervals;
use crate::error::{ConfigError, UnknownToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hour,
    Day,
    Week,
    Month,
}

struct Unit {
    name: &'static str,
    minutes: u32,
    period: &'static str,
    look_forward: u32,
}

/// Indexed by discriminant; order must match the enum.
const UNITS: [Unit; 4] = [
    // Half a day ahead.
    Unit {
        name: "hour",
        minutes: 60,
        period: "PT1H",
        look_forward: 12,
    },
    // Two weeks.
    Unit {
        name: "day",
        minutes: 1440,
        period: "P1D",
        look_forward: 14,
    },
    // A quarter.
    Unit {
        name: "week",
        minutes: 10080,
        period: "P1W",
        look_forward: 13,
    },
    // A year.
    Unit {
        name: "month",
        minutes: 43800,
        period: "P1M",
        look_forward: 12,
    },
];

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Hour,
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
    ];

    fn unit(self) -> &'static Unit {
        &UNITS[self as usize]
    }

    /// Canonical lowercase name (`"hour"`, `"day"`, ...).
    pub fn name(self) -> &'static str {
        self.unit().name
    }

    /// Nominal bucket length in minutes. `Month` is ~30.4 days.
    pub fn minutes_per_unit(self) -> u32 {
        self.unit().minutes
    }

    /// ISO-8601 period token handed to the time-series query builder.
    pub fn period_token(self) -> &'static str {
        self.unit().period
    }

    /// How many buckets ahead a forecast or job timeline should span.
    pub fn look_forward_periods(self) -> u32 {
        self.unit().look_forward
    }

    /// Decode a name, ignoring ASCII case. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(name))
    }

    /// Decode a possibly absent name; absence is not an error.
    pub fn from_optional(name: Option<&str>) -> Option<Self> {
        name.and_then(Self::from_name)
    }

    /// Every canonical name, in declaration order.
    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|g| g.name()).collect()
    }

    /// Baseline bucket count configured for this granularity.
    pub fn lookback_interval_count(
        self,
        intervals: &LookbackIntervals,
    ) -> Result<u32, ConfigError> {
        intervals
            .get(self)
            .ok_or(ConfigError::MissingLookback { granularity: self })
    }

    /// Start of the next bucket strictly after `at`, in epoch minutes.
    pub fn next_boundary_minutes(self, at: DateTime<Utc>) -> i64 {
        match self {
            Granularity::Hour => calendar::floor_to_hour(at) + MINUTES_PER_HOUR,
            Granularity::Day => calendar::floor_to_day(at) + MINUTES_PER_DAY,
            Granularity::Week => calendar::floor_to_week(at) + MINUTES_PER_WEEK,
            Granularity::Month => {
                let next = calendar::add_months(calendar::floor_to_month(at), 1);
                calendar::to_epoch_minutes(next)
            }
        }
    }

    /// Right edge for "data up to now" queries, in epoch minutes.
    ///
    /// This is the start of the bucket containing `at`, i.e. the end of the
    /// last complete bucket. Weeks start on Monday, so a Sunday resolves to the
    /// Monday six days earlier rather than the following day.
    pub fn interval_end_minutes(self, at: DateTime<Utc>) -> i64 {
        match self {
            Granularity::Hour => calendar::floor_to_hour(at),
            Granularity::Day => calendar::floor_to_day(at),
            Granularity::Week => calendar::floor_to_week(at),
            Granularity::Month => calendar::to_epoch_minutes(calendar::floor_to_month(at)),
        }
    }

    /// Move `at` back by `intervals` buckets.
    ///
    /// Fixed-length units shift by `intervals * minutes_per_unit()`; months
    /// shift by calendar months.
    pub fn subtract_intervals(self, at: DateTime<Utc>, intervals: u32) -> DateTime<Utc> {
        match self {
            Granularity::Month => calendar::sub_months(at, intervals),
            _ => {
                let minutes = i64::from(intervals) * i64::from(self.minutes_per_unit());
                calendar::add_minutes(at, -minutes)
            }
        }
    }

    /// Add `amount` hours, days, weeks or calendar months.
    pub fn increment(self, at: DateTime<Utc>, amount: u32) -> DateTime<Utc> {
        match self {
            Granularity::Hour => calendar::add_minutes(at, i64::from(amount) * MINUTES_PER_HOUR),
            Granularity::Day => calendar::add_days(at, u64::from(amount)),
            Granularity::Week => calendar::add_days(at, 7 * u64::from(amount)),
            Granularity::Month => calendar::add_months(at, amount),
        }
    }

    /// Subtract `amount` hours, days, weeks or calendar months.
    pub fn decrement(self, at: DateTime<Utc>, amount: u32) -> DateTime<Utc> {
        match self {
            Granularity::Hour => calendar::add_minutes(at, -i64::from(amount) * MINUTES_PER_HOUR),
            Granularity::Day => calendar::sub_days(at, u64::from(amount)),
            Granularity::Week => calendar::sub_days(at, 7 * u64::from(amount)),
            Granularity::Month => calendar::sub_months(at, amount),
        }
    }

    /// Whether the first boundary after `since` has been reached by `now`.
    pub fn has_boundary_passed(self, since: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        calendar::to_epoch_minutes(now) >= self.next_boundary_minutes(since)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownToken::new("granularity", s))
    }
}
