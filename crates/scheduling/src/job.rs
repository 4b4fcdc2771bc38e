//! The slice of a monitored job's record that scheduling reads and writes.

use serde::{Deserialize, Serialize};

use watchtower_core::{Granularity, JobStatus, Trigger};

use crate::schedule::ScheduleTimes;

/// A monitored query as seen by the scheduler.
///
/// Times are epoch minutes. `effective_query_time` is the right edge of the
/// data the next run analyses; `effective_run_time` is when that run fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJob {
    pub job_id: Option<i64>,
    pub name: String,
    /// How often the job runs.
    pub frequency: Trigger,
    /// Bucket size of the analysed time series.
    pub granularity: Granularity,
    /// Buckets aggregated into one data point (at least 1).
    pub granularity_range: u32,
    /// Hours to wait for data to settle before analysing a bucket.
    pub hours_of_lag: u32,
    /// Baseline bucket count; the configured lookback applies when unset.
    pub timeseries_range: Option<u32>,
    pub status: JobStatus,
    pub effective_query_time: Option<i64>,
    pub effective_run_time: Option<i64>,
}

impl ScheduledJob {
    pub fn new(name: impl Into<String>, frequency: Trigger, granularity: Granularity) -> Self {
        Self {
            job_id: None,
            name: name.into(),
            frequency,
            granularity,
            granularity_range: 1,
            hours_of_lag: 0,
            timeseries_range: None,
            status: JobStatus::Created,
            effective_query_time: None,
            effective_run_time: None,
        }
    }

    pub fn with_id(mut self, job_id: i64) -> Self {
        self.job_id = Some(job_id);
        self
    }

    pub fn with_hours_of_lag(mut self, hours: u32) -> Self {
        self.hours_of_lag = hours;
        self
    }

    pub fn with_granularity_range(mut self, range: u32) -> Self {
        self.granularity_range = range;
        self
    }

    pub fn with_timeseries_range(mut self, buckets: u32) -> Self {
        self.timeseries_range = Some(buckets);
        self
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Record the times of the next run.
    pub fn set_schedule(&mut self, times: ScheduleTimes) {
        self.effective_query_time = Some(times.query_minutes);
        self.effective_run_time = Some(times.run_minutes);
    }
}
