//! Job lifecycle tag.
//!
//! Only the tag lives here; which transitions are legal is the scheduler's
//! business.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    /// Created by a user, never launched.
    Created,
    /// Launched and scheduled.
    Running,
    /// Execution failed.
    Error,
    /// Stopped by a user or after an error.
    Stopped,
    /// Scheduling state no longer matches the job record.
    Zombie,
}

/// `(display name, stored token)`, indexed by discriminant.
const NAMES: [(&str, &str); 5] = [
    ("created", "CREATED"),
    ("running", "RUNNING"),
    ("error", "ERROR"),
    ("stopped", "STOPPED"),
    ("zombie", "ZOMBIE"),
];

const fn upper_of(lower: &str, upper: &str) -> bool {
    let (lower, upper) = (lower.as_bytes(), upper.as_bytes());
    if lower.len() != upper.len() {
        return false;
    }
    let mut i = 0;
    while i < lower.len() {
        if lower[i].to_ascii_uppercase() != upper[i] || lower[i].is_ascii_uppercase() {
            return false;
        }
        i += 1;
    }
    true
}

// Both projections must spell the same word.
const _: () = {
    let mut i = 0;
    while i < NAMES.len() {
        assert!(upper_of(NAMES[i].0, NAMES[i].1));
        i += 1;
    }
};

impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Created,
        JobStatus::Running,
        JobStatus::Error,
        JobStatus::Stopped,
        JobStatus::Zombie,
    ];

    /// Lowercase name shown to users.
    pub fn display_name(self) -> &'static str {
        NAMES[self as usize].0
    }

    /// Uppercase token written to storage.
    pub fn stored_token(self) -> &'static str {
        NAMES[self as usize].1
    }

    /// Decode either projection, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.display_name().eq_ignore_ascii_case(name))
    }

    /// Decode an exact stored token.
    pub fn from_stored_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.stored_token() == token)
    }

    pub fn from_optional(name: Option<&str>) -> Option<Self> {
        name.and_then(Self::from_name)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for JobStatus {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownToken::new("job status", s))
    }
}
