use chrono::{DateTime, TimeZone, Utc};
use watchtower_core::{Granularity, JobStatus, LookbackIntervals, Trigger, calendar};
use watchtower_scheduling::{
    AnalysisWindow, BackfillWindow, ScheduleError, ScheduledJob, is_due, reschedule_times,
    schedule_times, timeline,
};
use watchtower_store::{AccessorType, BackendSettings, keys, params_for};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn minutes(t: DateTime<Utc>) -> i64 {
    calendar::to_epoch_minutes(t)
}

#[test]
fn daily_job_lifecycle() {
    let lookback = LookbackIntervals::from_lookup(|_| None).unwrap();
    let now = at(2024, 7, 3, 1, 15);
    let mut job = ScheduledJob::new("checkout_errors", Trigger::Day, Granularity::Hour)
        .with_id(42)
        .with_hours_of_lag(2)
        .with_status(JobStatus::Running);

    // First schedule: yesterday's bucket, run after the lag plus 42 minutes.
    let first = schedule_times(&job, now);
    assert_eq!(first.query_minutes, minutes(at(2024, 7, 2, 0, 0)));
    assert_eq!(first.run_minutes, minutes(at(2024, 7, 2, 2, 42)));
    job.set_schedule(first);
    assert!(is_due(&job, now));

    // The run reads 672 hourly buckets up to the last complete lagged hour.
    let window = AnalysisWindow::for_job(&job, now, &lookback).unwrap();
    assert_eq!(window.end, at(2024, 7, 2, 23, 0));
    assert_eq!(window.start, at(2024, 6, 4, 23, 0));

    // After running it moves one day on and is no longer due.
    let next = reschedule_times(&job, now);
    job.set_schedule(next);
    assert_eq!(job.effective_run_time, Some(minutes(at(2024, 7, 3, 2, 42))));
    assert!(!is_due(&job, now));

    let series = timeline(std::slice::from_ref(&job), now, Granularity::Day);
    let first_point = series[0].points[0];
    assert!(first_point.display);
    assert_eq!(first_point.timestamp, at(2024, 7, 3, 2, 42).timestamp());
    assert!(
        series[0]
            .points
            .windows(2)
            .all(|w| w[1].timestamp - w[0].timestamp == 3600)
    );
}

#[test]
fn backfill_respects_configuration() {
    let job = ScheduledJob::new("signups", Trigger::Week, Granularity::Week).with_id(3);
    let now = at(2024, 7, 3, 0, 0);

    let missing = LookbackIntervals::empty();
    let err = BackfillWindow::plan(&job, at(2024, 1, 1, 0, 0), None, now, &missing).unwrap_err();
    assert!(matches!(err, ScheduleError::Config(_)));

    let lookback = LookbackIntervals::empty().with(Granularity::Week, 4);
    let plan = BackfillWindow::plan(&job, at(2024, 1, 3, 0, 0), None, now, &lookback).unwrap();
    // Wednesday 2024-01-03 floors to Monday 2024-01-01.
    assert_eq!(plan.window_start_minutes, minutes(at(2024, 1, 1, 0, 0)));
    assert_eq!(plan.window_end_minutes, minutes(at(2024, 7, 1, 0, 0)));
    assert_eq!(plan.query_start, at(2023, 12, 4, 0, 0));
}

#[test]
fn job_accessors_share_one_database() {
    let settings = BackendSettings::from_lookup(|_| None).unwrap();
    let mut db_names: Vec<String> = AccessorType::ALL
        .iter()
        .map(|accessor| {
            params_for(*accessor, &settings)
                .get(keys::DB_NAME)
                .unwrap()
                .to_string()
        })
        .collect();
    db_names.sort();
    db_names.dedup();
    // Metadata, dumper and scheduler all live in the jobs database.
    assert_eq!(db_names, vec!["DeletedJobs", "DruidClusters", "Emails", "Jobs", "Reports"]);
}

#[test]
fn job_record_round_trips_through_json() {
    let mut job = ScheduledJob::new("latency", Trigger::Month, Granularity::Day)
        .with_id(9)
        .with_timeseries_range(90);
    job.set_schedule(schedule_times(&job, at(2024, 3, 15, 12, 0)));
    let json = serde_json::to_string(&job).unwrap();
    let back: ScheduledJob = serde_json::from_str(&json).unwrap();
    assert_eq!(back, job);
    assert_eq!(back.effective_query_time, Some(minutes(at(2024, 3, 1, 0, 0))));
}
