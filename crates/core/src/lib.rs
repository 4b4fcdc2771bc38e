//! `watchtower-core` — time-bucket arithmetic and job enumerations.
//!
//! Everything here is pure: no I/O, no global state. Configuration arrives as
//! an explicit [`LookbackIntervals`] snapshot.

pub mod calendar;
pub mod config;
pub mod error;
pub mod granularity;
pub mod job_status;
pub mod trigger;

pub use config::LookbackIntervals;
pub use error::{ConfigError, UnknownToken};
pub use granularity::Granularity;
pub use job_status::JobStatus;
pub use trigger::{Frequency, Trigger};
