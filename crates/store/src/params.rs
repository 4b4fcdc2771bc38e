//! Backend configuration bag.

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};

/// String-keyed settings handed to a storage backend (host, credentials,
/// pool size, index names, ...).
///
/// No schema is enforced; each backend reads the keys it understands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreParams(HashMap<String, String>);

impl StoreParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Store `value` under `key`, returning the value it replaced.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Alias of [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StoreParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for StoreParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for StoreParams {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn basic_get_and_put() {
        let mut params = StoreParams::new();
        assert_eq!(params.size(), 0);
        assert_eq!(params.get("key1"), None);
        assert_eq!(params.put("key1", "value1"), None);
        assert_eq!(params.get("key1"), Some("value1"));
    }

    #[test]
    fn put_overwrites_and_returns_previous() {
        let mut params = StoreParams::new();
        params.put("redisPort", "6379");
        assert_eq!(params.put("redisPort", "6380"), Some("6379".to_string()));
        assert_eq!(params.get("redisPort"), Some("6380"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn built_from_properties() {
        let params: StoreParams = [("key1", "value1"), ("key2", "value2"), ("key3", "value3")]
            .into_iter()
            .collect();
        assert_eq!(params.len(), 3);

        let mut keys: Vec<&str> = params.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["key1", "key2", "key3"]);

        let mut values: Vec<&str> = params.values().collect();
        values.sort_unstable();
        assert_eq!(values, vec!["value1", "value2", "value3"]);
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut params = StoreParams::new();
        params.put("dbName", "Jobs");
        assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"dbName":"Jobs"}"#);
    }

    proptest! {
        /// The last write to a key wins, whatever order keys arrive in.
        #[test]
        fn last_put_wins(entries in prop::collection::vec(("[a-d]", "[a-z]{0,4}"), 0..32)) {
            let mut params = StoreParams::new();
            let mut expected = HashMap::new();
            for (k, v) in &entries {
                params.put(k.clone(), v.clone());
                expected.insert(k.clone(), v.clone());
            }
            prop_assert_eq!(params.len(), expected.len());
            for (k, v) in &expected {
                prop_assert_eq!(params.get(k), Some(v.as_str()));
            }
        }
    }
}
