use thiserror::Error;

use watchtower_core::{ConfigError, Granularity};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Backfill start and end resolve to less than one bucket apart.
    #[error("backfill spans {span} minutes, under one {granularity} bucket ({minimum} minutes)")]
    BackfillTooShort {
        granularity: Granularity,
        span: i64,
        minimum: i64,
    },

    #[error("granularity range must be at least 1")]
    InvalidGranularityRange,
}
