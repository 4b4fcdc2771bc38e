//! Run-time computation for recurring jobs.
//!
//! Each run analyses data up to a bucket boundary (the query time) and fires
//! once the job's lag has elapsed past that boundary, plus a per-job offset
//! that spreads jobs across the hour.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use watchtower_core::{Granularity, Trigger};
use watchtower_core::calendar::{self, MINUTES_PER_HOUR};

use crate::job::ScheduledJob;

/// Offset used for jobs that have not been assigned an id yet.
pub const DEFAULT_RUN_OFFSET_MINUTES: i64 = 30;

/// Query and run times of one job execution, in epoch minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTimes {
    pub query_minutes: i64,
    pub run_minutes: i64,
}

/// First schedule for `job` as of `now`.
///
/// The query time is `now` minus the job's lag, floored to the frequency's
/// bucket (to the minute for minute cadences). The run time adds the lag back
/// plus the job's offset within the hour.
pub fn schedule_times(job: &ScheduledJob, now: DateTime<Utc>) -> ScheduleTimes {
    let lagged = Granularity::Hour.decrement(now, job.hours_of_lag);
    let query_minutes = match job.frequency.granularity() {
        Some(granularity) => granularity.interval_end_minutes(lagged),
        None => calendar::to_epoch_minutes(lagged),
    };
    let run_minutes =
        query_minutes + i64::from(job.hours_of_lag) * MINUTES_PER_HOUR + run_offset(job);
    debug!(
        job_id = ?job.job_id,
        frequency = %job.frequency,
        query_minutes,
        run_minutes,
        "job scheduled"
    );
    ScheduleTimes {
        query_minutes,
        run_minutes,
    }
}

/// Schedule following the job's previous run.
///
/// Both times advance by one frequency unit, calendar months for monthly
/// jobs. Jobs that never ran are scheduled afresh with [`schedule_times`].
pub fn reschedule_times(job: &ScheduledJob, now: DateTime<Utc>) -> ScheduleTimes {
    let (Some(query), Some(run)) = (job.effective_query_time, job.effective_run_time) else {
        return schedule_times(job, now);
    };
    let next_query = match job.frequency.granularity() {
        Some(granularity) => {
            let next = granularity.increment(calendar::from_epoch_minutes(query), 1);
            calendar::to_epoch_minutes(next)
        }
        None => query + i64::from(job.frequency.minutes_per_unit()),
    };
    let step = next_query - query;
    debug!(job_id = ?job.job_id, step, "job rescheduled");
    ScheduleTimes {
        query_minutes: next_query,
        run_minutes: run + step,
    }
}

/// Whether the job's next run time has been reached.
pub fn is_due(job: &ScheduledJob, now: DateTime<Utc>) -> bool {
    job.effective_run_time
        .is_some_and(|run| run <= calendar::to_epoch_minutes(now))
}

/// Minute jobs fire one unit after their edge; others spread across the hour
/// by id.
fn run_offset(job: &ScheduledJob) -> i64 {
    match (job.frequency, job.job_id) {
        (Trigger::Minute, _) => i64::from(Trigger::Minute.minutes_per_unit()),
        (_, Some(id)) => (id.unsigned_abs() % 60) as i64,
        (_, None) => DEFAULT_RUN_OFFSET_MINUTES,
    }
}
