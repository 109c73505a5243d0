//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for svcwire
#[derive(Error, Debug)]
pub enum Error {
    /// A service name has no catalog entry
    #[error("Unsupported service in configuration: {name}")]
    UnsupportedService {
        /// The canonical service name that was requested
        name: String,
    },

    /// A missing dependency has no default implementation
    #[error("No default service found for \"{name}\"")]
    NoDefaultService {
        /// The dependency role that could not be satisfied
        name: String,
    },

    /// A role was registered twice
    #[error("Service role \"{role}\" is already registered")]
    DuplicateRole {
        /// The role that was already present
        role: String,
    },

    /// Lookup of an unregistered role
    #[error("Unknown service: {role}")]
    UnknownService {
        /// The role that was looked up
        role: String,
    },

    /// Dependency closure did not reach a fixpoint within the pass limit
    #[error("Dependency resolution did not settle after {passes} passes; unresolved: {unresolved:?}")]
    DependencyResolution {
        /// Number of passes that ran
        passes: usize,
        /// Dependencies still missing when the limit was hit
        unresolved: Vec<String>,
    },

    /// Typed lookup of a role holding a different service type
    #[error("Service \"{role}\" is not a {expected}")]
    ServiceTypeMismatch {
        /// The role that was looked up
        role: String,
        /// The requested concrete type
        expected: &'static str,
    },

    /// A raw configuration entry could not be interpreted
    #[error("Invalid configuration for service \"{role}\": {message}")]
    InvalidConfigEntry {
        /// The role whose entry is malformed
        role: String,
        /// Description of the problem
        message: String,
    },

    /// A service rejected its settings or dependencies while being configured
    #[error("Service \"{role}\" failed to configure: {message}")]
    Service {
        /// The role of the failing service
        role: String,
        /// Description of the failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an unsupported service error
    pub fn unsupported_service<S: Into<String>>(name: S) -> Self {
        Self::UnsupportedService { name: name.into() }
    }

    /// Create a missing default service error
    pub fn no_default_service<S: Into<String>>(name: S) -> Self {
        Self::NoDefaultService { name: name.into() }
    }

    /// Create a duplicate role error
    pub fn duplicate_role<S: Into<String>>(role: S) -> Self {
        Self::DuplicateRole { role: role.into() }
    }

    /// Create an unknown service error
    pub fn unknown_service<S: Into<String>>(role: S) -> Self {
        Self::UnknownService { role: role.into() }
    }

    /// Create a dependency resolution error
    pub fn dependency_resolution<I, S>(passes: usize, unresolved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::DependencyResolution {
            passes,
            unresolved: unresolved.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a service type mismatch error
    pub fn service_type_mismatch<S: Into<String>>(role: S, expected: &'static str) -> Self {
        Self::ServiceTypeMismatch {
            role: role.into(),
            expected,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create an invalid configuration entry error
    pub fn invalid_config_entry<R: Into<String>, M: Into<String>>(role: R, message: M) -> Self {
        Self::InvalidConfigEntry {
            role: role.into(),
            message: message.into(),
        }
    }

    /// Create a service configuration error
    pub fn service<R: Into<String>, M: Into<String>>(role: R, message: M) -> Self {
        Self::Service {
            role: role.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// The role or service name the error refers to, if any
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::UnsupportedService { name } | Self::NoDefaultService { name } => Some(name),
            Self::DuplicateRole { role }
            | Self::UnknownService { role }
            | Self::ServiceTypeMismatch { role, .. }
            | Self::InvalidConfigEntry { role, .. }
            | Self::Service { role, .. } => Some(role),
            Self::DependencyResolution { .. } | Self::Configuration { .. } | Self::Json { .. } => {
                None
            }
        }
    }
}
