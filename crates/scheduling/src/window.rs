//! Analysis windows: which span of the time series a run (or backfill) reads.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use watchtower_core::calendar::{self, MINUTES_PER_HOUR};
use watchtower_core::{ConfigError, Granularity, LookbackIntervals};

use crate::error::ScheduleError;
use crate::job::ScheduledJob;

/// `[start, end)` of a detection query, plus the baseline size used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisWindow {
    pub granularity: Granularity,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Buckets of history between `start` and `end`.
    pub intervals: u32,
}

impl AnalysisWindow {
    /// Window of `intervals` buckets ending at `end`.
    ///
    /// With no explicit count the configured lookback for the granularity is
    /// used; a missing setting is an error.
    pub fn ending_at(
        granularity: Granularity,
        end: DateTime<Utc>,
        intervals: Option<u32>,
        lookback: &LookbackIntervals,
    ) -> Result<Self, ConfigError> {
        let intervals = match intervals {
            Some(n) => n,
            None => granularity.lookback_interval_count(lookback)?,
        };
        Ok(Self {
            granularity,
            start: granularity.subtract_intervals(end, intervals),
            end,
            intervals,
        })
    }

    /// Window for `job`'s regular run at `now`: data up to the last complete
    /// bucket before the lag, with `timeseries_range × granularity_range`
    /// buckets of baseline.
    pub fn for_job(
        job: &ScheduledJob,
        now: DateTime<Utc>,
        lookback: &LookbackIntervals,
    ) -> Result<Self, ScheduleError> {
        let range = checked_range(job)?;
        let granularity = job.granularity;
        let lagged = Granularity::Hour.decrement(now, job.hours_of_lag);
        let end = calendar::from_epoch_minutes(granularity.interval_end_minutes(lagged));
        let per_point = resolve_intervals(job, lookback)?;
        let intervals = Some(per_point.saturating_mul(range));
        let window = Self::ending_at(granularity, end, intervals, lookback)?;
        debug!(job_id = ?job.job_id, start = %window.start, end = %window.end, "analysis window");
        Ok(window)
    }

    pub fn start_minutes(&self) -> i64 {
        calendar::to_epoch_minutes(self.start)
    }

    pub fn end_minutes(&self) -> i64 {
        calendar::to_epoch_minutes(self.end)
    }
}

/// Plan for re-running detection over a past span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackfillWindow {
    pub granularity: Granularity,
    /// First instant the query reads, including baseline history.
    pub query_start: DateTime<Utc>,
    /// First bucket edge a detection result is produced for (epoch minutes).
    pub window_start_minutes: i64,
    /// Last bucket edge a detection result is produced for (epoch minutes).
    pub window_end_minutes: i64,
    pub intervals: u32,
}

impl BackfillWindow {
    /// Plan a backfill of `job` from `start` to `end`.
    ///
    /// `end` defaults to `now` minus the job's lag. Both edges are floored to
    /// the job's granularity and shifted forward so a multi-bucket point ends
    /// on the edge. The span must cover at least one bucket; for months that
    /// is the length of the starting calendar month.
    pub fn plan(
        job: &ScheduledJob,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        lookback: &LookbackIntervals,
    ) -> Result<Self, ScheduleError> {
        let range = checked_range(job)?;
        let granularity = job.granularity;
        let minutes = i64::from(granularity.minutes_per_unit());
        let end = end.unwrap_or_else(|| {
            calendar::add_minutes(now, -i64::from(job.hours_of_lag) * MINUTES_PER_HOUR)
        });

        let shift = minutes * i64::from(range - 1);
        let window_end_minutes = granularity.interval_end_minutes(end) + shift;
        let window_start_minutes = granularity.interval_end_minutes(start) + shift;
        let span = window_end_minutes - window_start_minutes;
        let one_bucket =
            granularity.increment(calendar::from_epoch_minutes(window_start_minutes), 1);
        let minimum = calendar::to_epoch_minutes(one_bucket) - window_start_minutes;
        if span < minimum {
            return Err(ScheduleError::BackfillTooShort {
                granularity,
                span,
                minimum,
            });
        }

        let intervals = resolve_intervals(job, lookback)?;
        let query_start = granularity.subtract_intervals(
            calendar::from_epoch_minutes(window_start_minutes),
            intervals.saturating_mul(range),
        );
        info!(
            job_id = ?job.job_id,
            %query_start,
            window_start_minutes,
            window_end_minutes,
            "backfill planned"
        );
        Ok(Self {
            granularity,
            query_start,
            window_start_minutes,
            window_end_minutes,
            intervals,
        })
    }

    pub fn span_minutes(&self) -> i64 {
        self.window_end_minutes - self.window_start_minutes
    }
}

fn checked_range(job: &ScheduledJob) -> Result<u32, ScheduleError> {
    match job.granularity_range {
        0 => Err(ScheduleError::InvalidGranularityRange),
        range => Ok(range),
    }
}

fn resolve_intervals(job: &ScheduledJob, lookback: &LookbackIntervals) -> Result<u32, ConfigError> {
    match job.timeseries_range {
        Some(n) => Ok(n),
        None => job.granularity.lookback_interval_count(lookback),
    }
}
