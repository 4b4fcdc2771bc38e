//! Upcoming runs of queued jobs, laid out for a calendar view.

use chrono::{DateTime, Utc};
use serde::Serialize;

use watchtower_core::Granularity;
use watchtower_core::calendar::SECONDS_PER_MINUTE;

use crate::job::ScheduledJob;

/// One run instant, in epoch seconds.
///
/// Hidden points only pad an otherwise empty series to the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub timestamp: i64,
    pub display: bool,
}

impl TimelinePoint {
    fn visible(timestamp: i64) -> Self {
        Self {
            timestamp,
            display: true,
        }
    }

    fn hidden(timestamp: i64) -> Self {
        Self {
            timestamp,
            display: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineSeries {
    pub job_id: Option<i64>,
    pub name: String,
    pub points: Vec<TimelinePoint>,
}

/// Horizon of the timeline: `look_forward_periods` units past `now`.
pub fn look_forward_until(granularity: Granularity, now: DateTime<Utc>) -> DateTime<Utc> {
    granularity.increment(now, granularity.look_forward_periods())
}

/// Run instants of `job` within `[start, end)` seconds.
///
/// Runs repeat every `granularity` unit from the job's effective run time.
/// A job with no run inside the range (or no run time at all) yields a single
/// hidden point at `end`.
pub fn run_points(job: &ScheduledJob, start: i64, end: i64) -> Vec<TimelinePoint> {
    let Some(run_minutes) = job.effective_run_time else {
        return vec![TimelinePoint::hidden(end)];
    };
    let step = i64::from(job.granularity.minutes_per_unit()) * SECONDS_PER_MINUTE;
    // Widened so stored run times anywhere in i64 roll forward without overflow.
    let mut first = i128::from(run_minutes) * i128::from(SECONDS_PER_MINUTE);
    if first < i128::from(start) {
        let behind = i128::from(start) - first;
        first += (behind + i128::from(step) - 1).div_euclid(i128::from(step)) * i128::from(step);
    }
    let first = match i64::try_from(first) {
        Ok(first) if first < end => first,
        _ => return vec![TimelinePoint::hidden(end)],
    };
    (first..end)
        .step_by(step as usize)
        .map(TimelinePoint::visible)
        .collect()
}

/// One series per job covering `now` up to the look-forward horizon.
pub fn timeline(
    jobs: &[ScheduledJob],
    now: DateTime<Utc>,
    look_forward: Granularity,
) -> Vec<TimelineSeries> {
    let start = now.timestamp();
    let end = look_forward_until(look_forward, now).timestamp();
    jobs.iter()
        .map(|job| TimelineSeries {
            job_id: job.job_id,
            name: job.name.clone(),
            points: run_points(job, start, end),
        })
        .collect()
}
