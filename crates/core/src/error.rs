//! Error model for the scheduling core.

use thiserror::Error;

use crate::granularity::Granularity;

/// A configuration snapshot that cannot drive scheduling.
///
/// Surfaced to the caller before any job is scheduled; never masked with a
/// default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No lookback interval count is configured for the granularity.
    #[error("no lookback interval count configured for granularity `{granularity}`")]
    MissingLookback { granularity: Granularity },

    /// A setting was present but unusable.
    #[error("invalid value {value:?} for `{key}`: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// A token that names no variant of the target enumeration.
///
/// Returned only by the `FromStr` impls; the `from_name` decoders return `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{token}`")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

impl UnknownToken {
    pub fn new(kind: &'static str, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }
}
