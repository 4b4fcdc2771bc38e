//! Lookback configuration snapshot.
//!
//! Built once at startup and passed by reference to everything that sizes
//! analysis windows. Nothing here is global state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::granularity::Granularity;

pub const ENV_INTERVAL_HOURS: &str = "WATCHTOWER_INTERVAL_HOURS";
pub const ENV_INTERVAL_DAYS: &str = "WATCHTOWER_INTERVAL_DAYS";
pub const ENV_INTERVAL_WEEKS: &str = "WATCHTOWER_INTERVAL_WEEKS";
pub const ENV_INTERVAL_MONTHS: &str = "WATCHTOWER_INTERVAL_MONTHS";

/// Number of historical buckets queried as baseline, per granularity.
///
/// A `None` entry means the deployment did not configure that granularity;
/// [`Granularity::lookback_interval_count`] reports it as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackIntervals {
    pub hours: Option<u32>,
    pub days: Option<u32>,
    pub weeks: Option<u32>,
    pub months: Option<u32>,
}

impl Default for LookbackIntervals {
    fn default() -> Self {
        Self {
            hours: Some(672),
            days: Some(28),
            weeks: Some(12),
            months: Some(6),
        }
    }
}

impl LookbackIntervals {
    /// Snapshot with nothing configured.
    pub fn empty() -> Self {
        Self {
            hours: None,
            days: None,
            weeks: None,
            months: None,
        }
    }

    /// Configured count for `granularity`, if any.
    pub fn get(&self, granularity: Granularity) -> Option<u32> {
        match granularity {
            Granularity::Hour => self.hours,
            Granularity::Day => self.days,
            Granularity::Week => self.weeks,
            Granularity::Month => self.months,
        }
    }

    pub fn with(mut self, granularity: Granularity, count: u32) -> Self {
        let slot = match granularity {
            Granularity::Hour => &mut self.hours,
            Granularity::Day => &mut self.days,
            Granularity::Week => &mut self.weeks,
            Granularity::Month => &mut self.months,
        };
        *slot = Some(count);
        self
    }

    /// Load from `WATCHTOWER_INTERVAL_*`, keeping defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup (environment, file, test map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut intervals = Self::default();
        for (key, granularity) in [
            (ENV_INTERVAL_HOURS, Granularity::Hour),
            (ENV_INTERVAL_DAYS, Granularity::Day),
            (ENV_INTERVAL_WEEKS, Granularity::Week),
            (ENV_INTERVAL_MONTHS, Granularity::Month),
        ] {
            if let Some(raw) = lookup(key) {
                let count = parse_count(key, &raw)?;
                debug!(key, count, %granularity, "lookback interval override");
                intervals = intervals.with(granularity, count);
            }
        }
        Ok(intervals)
    }

    /// Fail unless every granularity has a count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Granularity::ALL
            .iter()
            .try_for_each(|g| g.lookback_interval_count(self).map(|_| ()))
    }
}

fn parse_count(key: &str, raw: &str) -> Result<u32, ConfigError> {
    let count: u32 = raw
        .trim()
        .parse()
        .map_err(|e| ConfigError::invalid(key, raw, format!("{e}")))?;
    if count == 0 {
        return Err(ConfigError::invalid(key, raw, "interval count must be positive"));
    }
    Ok(count)
}
