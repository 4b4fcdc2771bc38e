//! Persisted entity kinds.

use core::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Which kind of persisted record a storage accessor serves.
///
/// The discriminant is written to storage and on the wire. New kinds are
/// appended; existing ones are never reordered or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AccessorType {
    AnomalyReport = 0,
    DeletedJobMetadata = 1,
    DruidCluster = 2,
    JobMetadata = 3,
    EmailMetadata = 4,
    JsonDumper = 5,
    JobScheduler = 6,
}

impl AccessorType {
    /// Every kind, in ordinal order.
    pub const ALL: [AccessorType; 7] = [
        AccessorType::AnomalyReport,
        AccessorType::DeletedJobMetadata,
        AccessorType::DruidCluster,
        AccessorType::JobMetadata,
        AccessorType::EmailMetadata,
        AccessorType::JsonDumper,
        AccessorType::JobScheduler,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            AccessorType::AnomalyReport => "anomaly_report",
            AccessorType::DeletedJobMetadata => "deleted_job_metadata",
            AccessorType::DruidCluster => "druid_cluster",
            AccessorType::JobMetadata => "job_metadata",
            AccessorType::EmailMetadata => "email_metadata",
            AccessorType::JsonDumper => "json_dumper",
            AccessorType::JobScheduler => "job_scheduler",
        }
    }

    /// Name of the logical database the accessor's records live in.
    pub fn database_name(self) -> &'static str {
        match self {
            AccessorType::AnomalyReport => "Reports",
            AccessorType::DeletedJobMetadata => "DeletedJobs",
            AccessorType::DruidCluster => "DruidClusters",
            AccessorType::EmailMetadata => "Emails",
            AccessorType::JobMetadata | AccessorType::JsonDumper | AccessorType::JobScheduler => {
                "Jobs"
            }
        }
    }

    /// Name of the id counter/field for the accessor's records.
    pub fn id_name(self) -> &'static str {
        match self {
            AccessorType::AnomalyReport => "ReportId",
            AccessorType::DeletedJobMetadata => "DeletedJobId",
            AccessorType::DruidCluster => "ClusterId",
            AccessorType::EmailMetadata => "EmailId",
            AccessorType::JobMetadata | AccessorType::JsonDumper | AccessorType::JobScheduler => {
                "JobId"
            }
        }
    }
}

impl fmt::Display for AccessorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for AccessorType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for AccessorType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ordinal = u8::deserialize(deserializer)?;
        AccessorType::from_ordinal(ordinal)
            .ok_or_else(|| de::Error::custom(format!("unknown accessor type ordinal {ordinal}")))
    }
}
