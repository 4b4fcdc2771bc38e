//! Process-wide logging setup shared by the watchtower binaries.

pub mod tracing;

pub use self::tracing::{DEFAULT_FILTER, init, init_with_filter};
