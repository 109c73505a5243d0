//! Raw configuration entries
//!
//! A role is configured with either a bare descriptor or a
//! `[descriptor, settings]` pair. Two shorthand forms select the role's
//! default implementation instead of naming one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::value_objects::{ServiceDescriptor, ServiceSettings};

/// A raw configuration entry for one role, before normalization
#[derive(Debug, Clone)]
pub enum ServiceConfigEntry {
    /// A descriptor with no settings
    Bare(ServiceDescriptor),
    /// A descriptor with optional settings
    Pair(ServiceDescriptor, Option<ServiceSettings>),
    /// The role's default implementation with the given settings
    RoleDefault(ServiceSettings),
}

impl ServiceConfigEntry {
    /// Pair a descriptor with settings
    pub fn with_settings<D: Into<ServiceDescriptor>>(descriptor: D, settings: ServiceSettings) -> Self {
        Self::Pair(descriptor.into(), Some(settings))
    }

    /// Use the role's default implementation with no settings
    pub fn role_default() -> Self {
        Self::RoleDefault(ServiceSettings::default())
    }
}

impl From<ServiceDescriptor> for ServiceConfigEntry {
    fn from(descriptor: ServiceDescriptor) -> Self {
        Self::Bare(descriptor)
    }
}

impl From<&str> for ServiceConfigEntry {
    fn from(name: &str) -> Self {
        Self::Bare(ServiceDescriptor::from(name))
    }
}

impl From<String> for ServiceConfigEntry {
    fn from(name: String) -> Self {
        Self::Bare(ServiceDescriptor::from(name))
    }
}

/// Serializable form of a configuration entry
///
/// ```toml
/// [services]
/// timer = true                          # role default
/// log = false                           # skipped
/// cache = "CacheService"                # catalog name
/// event = ["EventService"]              # name, settings omitted
/// price = ["PriceService", { ttl = 5 }] # name and settings
/// gas = { limit = 4000000 }             # role default with settings
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceConfigValue {
    /// `true` selects the role default, `false` skips the role
    Enabled(bool),
    /// A catalog name
    Name(String),
    /// `[name]` or `[name, settings]`
    Sequence(Vec<Value>),
    /// Settings for the role default
    Settings(ServiceSettings),
}

impl ServiceConfigValue {
    /// Convert into a configuration entry
    ///
    /// Returns `Ok(None)` for a disabled role.
    pub fn into_entry(self, role: &str) -> Result<Option<ServiceConfigEntry>> {
        match self {
            Self::Enabled(false) => Ok(None),
            Self::Enabled(true) => Ok(Some(ServiceConfigEntry::role_default())),
            Self::Name(name) => Ok(Some(ServiceConfigEntry::Bare(ServiceDescriptor::Name(name)))),
            Self::Settings(settings) => Ok(Some(ServiceConfigEntry::RoleDefault(settings))),
            Self::Sequence(items) => sequence_entry(role, items).map(Some),
        }
    }
}

fn sequence_entry(role: &str, items: Vec<Value>) -> Result<ServiceConfigEntry> {
    let len = items.len();
    let mut items = items.into_iter();
    let (name, settings) = match (items.next(), items.next(), items.next()) {
        (Some(name), settings, None) => (name, settings),
        _ => {
            return Err(Error::invalid_config_entry(
                role,
                format!("expected [name] or [name, settings], got {len} elements"),
            ));
        }
    };

    let name = match name {
        Value::String(name) => name,
        other => {
            return Err(Error::invalid_config_entry(
                role,
                format!("service name must be a string, got {other}"),
            ));
        }
    };

    let settings = settings
        .map(ServiceSettings::try_from)
        .transpose()
        .map_err(|e| Error::invalid_config_entry(role, e.to_string()))?;

    Ok(ServiceConfigEntry::Pair(ServiceDescriptor::Name(name), settings))
}
