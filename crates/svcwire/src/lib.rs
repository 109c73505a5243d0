//! # svcwire
//!
//! A configuration-driven service container. Services are named in a
//! role → service mapping; the container instantiates them, pulls in the
//! defaults for every dependency nobody configured, injects each service
//! with its settings and dependencies, and caches the result.
//!
//! ## Example
//!
//! ```ignore
//! use svcwire::{ServiceConfig, Wiring};
//! use svcwire::providers::CacheService;
//!
//! let provider = Wiring::standard(ServiceConfig::new().with("cache", "CacheService"));
//!
//! // "timer" was never configured; the cache depends on it, so the default
//! // TimerService is registered and bound automatically.
//! let cache = provider.service_as::<CacheService>("cache")?;
//! cache.set("greeting", "hello")?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - the `Service` port, descriptors, settings and errors
//! - `infrastructure` - catalog, registry, resolver, provider, config and logging
//! - `providers` - ready-made timer, cache, logger and event bus services

// Force-link svcwire-providers so their catalog registrations are included
extern crate svcwire_providers;

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

/// Domain layer - service port, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use svcwire_domain::*;
}

/// Infrastructure layer - container, configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use svcwire_infrastructure::*;
}

/// Provided services
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use svcwire_providers::*;
}

// Re-export commonly used types at the crate root
pub use domain::{
    Error, Result, Service, ServiceConfigEntry, ServiceDescriptor, ServiceLocator,
    ServiceSettings,
};
pub use infrastructure::{
    AppConfig, ConfigLoader, ContainerConfig, DefaultServices, ServiceCatalog, ServiceConfig,
    ServiceContainer, ServiceProvider,
};

/// Shortcuts for building providers over the linked-in catalog
#[derive(Debug, Clone, Copy)]
pub struct Wiring;

impl Wiring {
    /// Every service linked into the binary
    pub fn catalog() -> Arc<ServiceCatalog> {
        Arc::new(ServiceCatalog::from_registry())
    }

    /// Every default role binding linked into the binary
    pub fn defaults() -> Arc<DefaultServices> {
        Arc::new(DefaultServices::from_registry())
    }

    /// Provider over `config` with the linked-in catalog and defaults
    pub fn standard(config: ServiceConfig) -> ServiceProvider {
        ServiceProvider::new(config, Self::catalog(), Self::defaults())
    }

    /// Provider for the `[services]` and `[container]` sections of a loaded config
    pub fn from_app_config(app: &AppConfig) -> Result<ServiceProvider> {
        let config = ServiceConfig::from_values(&app.services)?;
        debug!(roles = config.len(), "Services configured from application config");
        Ok(Self::standard(config).with_options(app.container))
    }

    /// Load a configuration file (plus environment overrides) and build a provider
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<ServiceProvider> {
        let app = ConfigLoader::new().with_config_path(path).load()?;
        Self::from_app_config(&app)
    }
}
