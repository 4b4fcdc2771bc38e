//! Backend connection settings and the default parameter set per accessor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use watchtower_core::ConfigError;

use crate::accessor::AccessorType;
use crate::keys;
use crate::params::StoreParams;

pub const ENV_STORE_HOSTNAME: &str = "WATCHTOWER_STORE_HOSTNAME";
pub const ENV_STORE_PORT: &str = "WATCHTOWER_STORE_PORT";
pub const ENV_STORE_SSL: &str = "WATCHTOWER_STORE_SSL";
pub const ENV_STORE_TIMEOUT_MS: &str = "WATCHTOWER_STORE_TIMEOUT_MS";
pub const ENV_STORE_PASSWORD: &str = "WATCHTOWER_STORE_PASSWORD";
pub const ENV_STORE_CLUSTERED: &str = "WATCHTOWER_STORE_CLUSTERED";

/// Connection settings shared by every accessor.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    pub hostname: String,
    pub port: u16,
    pub ssl: bool,
    pub timeout_ms: u64,
    pub password: Option<String>,
    pub clustered: bool,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            hostname: "127.0.0.1".to_string(),
            port: 6379,
            ssl: false,
            timeout_ms: 5000,
            password: None,
            clustered: false,
        }
    }
}

// Keeps the password out of logs.
impl core::fmt::Debug for BackendSettings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BackendSettings")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("ssl", &self.ssl)
            .field("timeout_ms", &self.timeout_ms)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("clustered", &self.clustered)
            .finish()
    }
}

impl BackendSettings {
    /// Load from `WATCHTOWER_STORE_*`, keeping defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        if let Some(hostname) = lookup(ENV_STORE_HOSTNAME) {
            settings.hostname = hostname;
        }
        if let Some(raw) = lookup(ENV_STORE_PORT) {
            settings.port = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(ENV_STORE_PORT, &raw, format!("{e}")))?;
        }
        if let Some(raw) = lookup(ENV_STORE_SSL) {
            settings.ssl = parse_flag(ENV_STORE_SSL, &raw)?;
        }
        if let Some(raw) = lookup(ENV_STORE_TIMEOUT_MS) {
            settings.timeout_ms = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(ENV_STORE_TIMEOUT_MS, &raw, format!("{e}")))?;
        }
        settings.password = lookup(ENV_STORE_PASSWORD).filter(|p| !p.is_empty());
        if let Some(raw) = lookup(ENV_STORE_CLUSTERED) {
            settings.clustered = parse_flag(ENV_STORE_CLUSTERED, &raw)?;
        }
        debug!(?settings, "store settings loaded");
        Ok(settings)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::invalid(key, raw, "expected a boolean")),
    }
}

/// Default parameters a backend receives for `accessor`.
///
/// Connection settings come first, then every index name mapped to itself,
/// then the accessor's database and id names. The password and cluster flag
/// are only present when set.
pub fn params_for(accessor: AccessorType, settings: &BackendSettings) -> StoreParams {
    let mut params = StoreParams::new();
    params.put(keys::HOSTNAME, settings.hostname.as_str());
    params.put(keys::PORT, settings.port.to_string());
    params.put(keys::SSL, settings.ssl.to_string());
    params.put(keys::TIMEOUT, settings.timeout_ms.to_string());
    if let Some(password) = &settings.password {
        params.put(keys::PASSWORD, password.as_str());
    }
    if settings.clustered {
        params.put(keys::CLUSTERED, "true");
    }
    params.extend(keys::INDEX_NAMES.iter().map(|name| (*name, *name)));
    params.put(keys::DB_NAME, accessor.database_name());
    params.put(keys::ID_NAME, accessor.id_name());
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = BackendSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, BackendSettings::default());
    }

    #[test]
    fn overrides_and_flags() {
        let settings = BackendSettings::from_lookup(lookup(&[
            (ENV_STORE_HOSTNAME, "cache.internal"),
            (ENV_STORE_PORT, "6380"),
            (ENV_STORE_SSL, "TRUE"),
            (ENV_STORE_PASSWORD, "hunter2"),
            (ENV_STORE_CLUSTERED, "1"),
        ]))
        .unwrap();
        assert_eq!(settings.hostname, "cache.internal");
        assert_eq!(settings.port, 6380);
        assert!(settings.ssl);
        assert!(settings.clustered);
        assert_eq!(settings.password.as_deref(), Some("hunter2"));
        assert!(!format!("{settings:?}").contains("hunter2"));
    }

    #[test]
    fn bad_values_are_config_errors() {
        let err = BackendSettings::from_lookup(lookup(&[(ENV_STORE_PORT, "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == ENV_STORE_PORT));
        let err = BackendSettings::from_lookup(lookup(&[(ENV_STORE_SSL, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn params_carry_connection_and_layout() {
        let params = params_for(AccessorType::AnomalyReport, &BackendSettings::default());
        assert_eq!(params.get(keys::HOSTNAME), Some("127.0.0.1"));
        assert_eq!(params.get(keys::PORT), Some("6379"));
        assert_eq!(params.get(keys::SSL), Some("false"));
        assert_eq!(params.get(keys::TIMEOUT), Some("5000"));
        assert_eq!(params.get(keys::PASSWORD), None);
        assert_eq!(params.get(keys::CLUSTERED), None);
        assert_eq!(params.get(keys::INDEX_JOB_STATUS), Some(keys::INDEX_JOB_STATUS));
        assert_eq!(params.get(keys::QUEUE_JOB_SCHEDULE), Some("jobQueue"));
        assert_eq!(params.get(keys::DB_NAME), Some("Reports"));
        assert_eq!(params.get(keys::ID_NAME), Some("ReportId"));
        assert_eq!(params.len(), 4 + keys::INDEX_NAMES.len() + 2);
    }

    #[test]
    fn params_differ_only_in_layout_between_accessors() {
        let settings = BackendSettings {
            password: Some("secret".to_string()),
            clustered: true,
            ..BackendSettings::default()
        };
        let jobs = params_for(AccessorType::JobMetadata, &settings);
        let clusters = params_for(AccessorType::DruidCluster, &settings);
        assert_eq!(jobs.get(keys::PASSWORD), Some("secret"));
        assert_eq!(jobs.get(keys::CLUSTERED), Some("true"));
        assert_eq!(jobs.get(keys::DB_NAME), Some("Jobs"));
        assert_eq!(clusters.get(keys::DB_NAME), Some("DruidClusters"));
        for (key, value) in jobs.iter() {
            if key != keys::DB_NAME && key != keys::ID_NAME {
                assert_eq!(clusters.get(key), Some(value));
            }
        }
    }
}
