//! Job cadence: how often a job is executed, independent of the granularity
//! its analysis runs at.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownToken;
use crate::granularity::Granularity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

/// Also called the job's frequency.
pub type Frequency = Trigger;

/// `(name, minutes per unit)`, indexed by discriminant.
const CADENCES: [(&str, u32); 5] = [
    ("minute", 1),
    ("hour", 60),
    ("day", 1440),
    ("week", 10080),
    ("month", 43800),
];

impl Trigger {
    pub const ALL: [Trigger; 5] = [
        Trigger::Minute,
        Trigger::Hour,
        Trigger::Day,
        Trigger::Week,
        Trigger::Month,
    ];

    pub fn name(self) -> &'static str {
        CADENCES[self as usize].0
    }

    pub fn minutes_per_unit(self) -> u32 {
        CADENCES[self as usize].1
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    pub fn from_optional(name: Option<&str>) -> Option<Self> {
        name.and_then(Self::from_name)
    }

    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.name()).collect()
    }

    /// Analysis granularity sharing this cadence's name; `Minute` has none.
    pub fn granularity(self) -> Option<Granularity> {
        Granularity::from_name(self.name())
    }
}

impl From<Granularity> for Trigger {
    fn from(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Hour => Trigger::Hour,
            Granularity::Day => Trigger::Day,
            Granularity::Week => Trigger::Week,
            Granularity::Month => Trigger::Month,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Trigger {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownToken::new("trigger", s))
    }
}
