//! Loose configuration tree.
//!
//! Policy configuration arrives either from a config file (YAML/JSON, via
//! serde) or from code. Both land in `ConfigValue`, a JSON-like tree that also
//! carries calendar-time values. Shape is not checked here; see `validate`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// JSON-like value with an extra calendar-time leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<ConfigValue>),
    Object(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Short type name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Number(_) => "number",
            ConfigValue::String(_) => "string",
            ConfigValue::Date(_) => "date",
            ConfigValue::Array(_) => "array",
            ConfigValue::Object(_) => "object",
        }
    }

    /// Build an annotated `{comment, value}` object.
    pub fn annotated(comment: impl Into<ConfigValue>, value: impl Into<ConfigValue>) -> Self {
        let mut map = BTreeMap::new();
        map.insert("comment".to_string(), comment.into());
        map.insert("value".to_string(), value.into());
        ConfigValue::Object(map)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => ConfigValue::Null,
            serde_json::Value::Bool(b) => ConfigValue::Bool(b),
            serde_json::Value::Number(n) => ConfigValue::Number(n),
            serde_json::Value::String(s) => ConfigValue::String(s),
            serde_json::Value::Array(items) => {
                ConfigValue::Array(items.into_iter().map(ConfigValue::from).collect())
            }
            serde_json::Value::Object(map) => ConfigValue::Object(
                map.into_iter().map(|(k, v)| (k, ConfigValue::from(v))).collect(),
            ),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<DateTime<Utc>> for ConfigValue {
    fn from(d: DateTime<Utc>) -> Self {
        ConfigValue::Date(d)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        ConfigValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(d).map(ConfigValue::from)
    }
}

/// Root policy configuration as supplied by the caller.
///
/// `Default` is the absent configuration (null), which the validator rejects.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig(ConfigValue);

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig(ConfigValue::Null)
    }
}

impl PolicyConfig {
    /// Empty mapping, ready for `with`.
    pub fn new() -> Self {
        PolicyConfig(ConfigValue::Object(BTreeMap::new()))
    }

    /// Insert a key. A non-mapping root is replaced by a fresh mapping.
    pub fn with(mut self, key: &str, value: impl Into<ConfigValue>) -> Self {
        if !matches!(self.0, ConfigValue::Object(_)) {
            self.0 = ConfigValue::Object(BTreeMap::new());
        }
        if let ConfigValue::Object(map) = &mut self.0 {
            map.insert(key.to_string(), value.into());
        }
        self
    }

    pub fn root(&self) -> &ConfigValue {
        &self.0
    }
}

impl From<ConfigValue> for PolicyConfig {
    fn from(v: ConfigValue) -> Self {
        PolicyConfig(v)
    }
}

impl From<serde_json::Value> for PolicyConfig {
    fn from(v: serde_json::Value) -> Self {
        PolicyConfig(v.into())
    }
}

impl<'de> Deserialize<'de> for PolicyConfig {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        ConfigValue::deserialize(d).map(PolicyConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_tree_converts() {
        let v = ConfigValue::from(json!({"contact": ["a", {"comment": "c", "value": "b"}]}));
        match v {
            ConfigValue::Object(map) => assert_eq!(map["contact"].kind(), "array"),
            other => assert_eq!(other.kind(), "object"),
        }
    }

    #[test]
    fn builder_replaces_non_mapping_root() {
        let cfg = PolicyConfig::default().with("contact", "a@example.com");
        assert_eq!(cfg.root().kind(), "object");
    }
}
