//! Per-service settings
//!
//! Settings are an opaque mapping of option name to JSON value. The container
//! never interprets them; each service reads what it needs in its
//! configuration hook.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Settings attached to a role and handed to the service when it is configured
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceSettings(Map<String, Value>);

impl ServiceSettings {
    /// Create an empty settings mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a setting, builder style
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a setting, returning the previous value
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Raw access to a setting
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Read a setting as a typed value
    ///
    /// Returns `Ok(None)` when the key is absent and an error when the value
    /// does not deserialize into `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| Error::configuration_with_source(format!("setting \"{key}\""), e)),
        }
    }

    /// Read a setting, falling back to `default` when absent
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Whether the key is present
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Whether no settings are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the option names
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for ServiceSettings {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ServiceSettings> for Value {
    fn from(settings: ServiceSettings) -> Self {
        Value::Object(settings.0)
    }
}

impl TryFrom<Value> for ServiceSettings {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(Error::configuration(format!(
                "settings must be a table, got {other}"
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ServiceSettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
