//! Configuration types

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use svcwire_domain::value_objects::ServiceConfigValue;

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::di::RegistrationPolicy;

/// Serializable `[services]` table: role → raw entry
pub type ServicesConfig = BTreeMap<String, ServiceConfigValue>;

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Container build options
    pub container: ContainerConfig,
    /// Role → service entries
    pub services: ServicesConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON instead of text
    pub json_format: bool,
    /// Optional file to append logs to, rotated daily
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Container build options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Cap on dependency-resolution passes; defaults to the default-table size plus one
    pub max_resolution_passes: Option<usize>,
    /// What happens when a role is registered twice
    pub registration: RegistrationPolicy,
}
