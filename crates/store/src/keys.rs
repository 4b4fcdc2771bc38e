//! Parameter keys understood by the storage backends.

pub const HOSTNAME: &str = "redisHostname";
pub const PORT: &str = "redisPort";
pub const SSL: &str = "redisSsl";
pub const TIMEOUT: &str = "redisTimeout";
pub const PASSWORD: &str = "redisPassword";
pub const CLUSTERED: &str = "redisClustered";

pub const DB_NAME: &str = "dbName";
pub const ID_NAME: &str = "idName";

pub const INDEX_REPORT_JOB_ID: &str = "reportJobIdIndex";
pub const INDEX_TIMESTAMP: &str = "timestampIndex";
pub const INDEX_FREQUENCY: &str = "frequencyIndex";
pub const INDEX_DELETED_ID: &str = "deletedIdIndex";
pub const INDEX_CLUSTER_ID: &str = "clusterIdIndex";
pub const INDEX_QUERY_ID: &str = "queryIdIndex";
pub const INDEX_JOB_ID: &str = "jobIdIndex";
pub const INDEX_JOB_CLUSTER_ID: &str = "jobClusterIdIndex";
pub const INDEX_JOB_STATUS: &str = "jobStatusIndex";
pub const INDEX_EMAIL_ID: &str = "emailIdIndex";
pub const INDEX_EMAIL_REPORT: &str = "emailIdReportIndex";
pub const INDEX_EMAIL_TRIGGER: &str = "emailIdTriggerIndex";
pub const INDEX_EMAIL_JOB_ID: &str = "emailIdJobIndex";

pub const QUEUE_JOB_SCHEDULE: &str = "jobQueue";

/// Secondary index and queue names. Each maps to itself in the default
/// parameter set so deployments can rename them per accessor.
pub const INDEX_NAMES: [&str; 14] = [
    INDEX_REPORT_JOB_ID,
    INDEX_TIMESTAMP,
    INDEX_FREQUENCY,
    INDEX_DELETED_ID,
    INDEX_CLUSTER_ID,
    INDEX_QUERY_ID,
    INDEX_JOB_ID,
    INDEX_JOB_CLUSTER_ID,
    INDEX_JOB_STATUS,
    INDEX_EMAIL_ID,
    INDEX_EMAIL_REPORT,
    INDEX_EMAIL_TRIGGER,
    INDEX_EMAIL_JOB_ID,
    QUEUE_JOB_SCHEDULE,
];
