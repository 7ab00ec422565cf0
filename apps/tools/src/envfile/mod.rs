//! The flat `KEY=value` file format shared by the setup tool and the validator.

pub mod parser;
pub mod writer;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use parser::{load, parse};
pub use writer::{upsert_line, write_from_template};

/// Merged key → value configuration.
///
/// Values are kept verbatim. An empty value counts as "not set" for every
/// lookup helper except [`ConfigMap::raw`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigMap {
    entries: BTreeMap<String, String>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the process environment. Non UTF-8 entries are skipped.
    pub fn from_process_env() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Overlays `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: ConfigMap) {
        self.entries.extend(other.entries);
    }

    /// Builder-style [`ConfigMap::merge`].
    pub fn merged(mut self, other: ConfigMap) -> Self {
        self.merge(other);
        self
    }

    /// The stored value, even if empty.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The stored value when present and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.raw(key).filter(|v| !v.is_empty())
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// `true` only for the exact string `"true"`.
    pub fn flag(&self, key: &str) -> bool {
        self.raw(key) == Some("true")
    }

    /// `true` unless the value is exactly `"false"`; an absent key counts as on.
    pub fn not_disabled(&self, key: &str) -> bool {
        self.raw(key) != Some("false")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ConfigMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Insertion-ordered key → value list.
///
/// Setting an existing key overwrites its value in place, so the order of
/// first appearance decides where new lines land in a written file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvValues {
    entries: Vec<(String, String)>,
}

impl EnvValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Applies every entry of `other` in its order.
    pub fn extend(&mut self, other: EnvValues) {
        for (k, v) in other.entries {
            self.set(k, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_source_wins_on_merge() {
        let web: ConfigMap = [("NODE_ENV", "development"), ("DB_HOST", "web")]
            .into_iter()
            .collect();
        let api: ConfigMap = [("DB_HOST", "api")].into_iter().collect();
        let process: ConfigMap = [("NODE_ENV", "production")].into_iter().collect();

        let merged = web.merged(api).merged(process);
        assert_eq!(merged.get("DB_HOST"), Some("api"));
        assert_eq!(merged.get("NODE_ENV"), Some("production"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_empty_value_is_not_set() {
        let map: ConfigMap = [("JWT_SECRET", "")].into_iter().collect();
        assert_eq!(map.raw("JWT_SECRET"), Some(""));
        assert_eq!(map.get("JWT_SECRET"), None);
        assert!(!map.is_set("JWT_SECRET"));
    }

    #[test]
    fn test_flag_semantics() {
        let map: ConfigMap = [("A", "true"), ("B", "TRUE"), ("C", "false")]
            .into_iter()
            .collect();
        assert!(map.flag("A"));
        assert!(!map.flag("B"));
        assert!(!map.flag("MISSING"));
        assert!(map.not_disabled("MISSING"));
        assert!(map.not_disabled("B"));
        assert!(!map.not_disabled("C"));
    }

    #[test]
    fn test_env_values_keep_first_position_on_overwrite() {
        let mut values = EnvValues::new();
        values.set("A", "1");
        values.set("B", "2");
        values.set("A", "3");
        let pairs: Vec<_> = values.iter().collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn test_env_values_extend_appends_new_keys() {
        let mut base = EnvValues::new();
        base.set("NODE_ENV", "production");
        let mut more = EnvValues::new();
        more.set("NODE_ENV", "development");
        more.set("JWT_SECRET", "abc");
        base.extend(more);
        assert_eq!(base.get("NODE_ENV"), Some("development"));
        assert_eq!(base.len(), 2);
    }
}
