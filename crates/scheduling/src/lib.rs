//! `watchtower-scheduling`
//!
//! When jobs run and which data each run reads: schedule and reschedule
//! times, analysis and backfill windows, and the look-ahead timeline.

pub mod error;
pub mod job;
pub mod schedule;
pub mod timeline;
pub mod window;

pub use error::ScheduleError;
pub use job::ScheduledJob;
pub use schedule::{ScheduleTimes, is_due, reschedule_times, schedule_times};
pub use timeline::{TimelinePoint, TimelineSeries, look_forward_until, run_points, timeline};
pub use window::{AnalysisWindow, BackfillWindow};
