//! Service Provider
//!
//! Orchestrates a container build and memoizes the result:
//!
//! ```text
//! ServiceConfig ─ normalize ─→ instantiate ─→ register ─→ resolve ─→ inject
//!                                                                     │
//! provider.service("cache") ←── OnceCell<Arc<ServiceContainer>> ←─────┘
//! ```
//!
//! The first `service()` call builds the container. Concurrent callers wait
//! for that single build. A failed build caches nothing, so the next call
//! starts again from scratch.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use svcwire_domain::error::Result;
use svcwire_domain::ports::{Service, downcast_service};
use svcwire_domain::value_objects::{ServiceConfigEntry, ServiceDescriptor, ServiceSettings};
use tracing::{debug, error, info};

use super::catalog::ServiceCatalog;
use super::container::ServiceContainer;
use super::defaults::DefaultServices;
use super::normalizer::{NormalizedService, normalize};
use super::resolver::DependencyResolver;
use crate::config::{ContainerConfig, ServicesConfig};

/// Role → raw entry mapping the provider builds from
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    entries: BTreeMap<String, ServiceConfigEntry>,
}

impl ServiceConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert the serializable `[services]` table
    ///
    /// Disabled roles are left out.
    pub fn from_values(values: &ServicesConfig) -> Result<Self> {
        let mut config = Self::new();
        for (role, value) in values {
            if let Some(entry) = value.clone().into_entry(role)? {
                config.insert(role.clone(), entry);
            }
        }
        Ok(config)
    }

    /// Configure `role`, builder style
    pub fn with<R: Into<String>, E: Into<ServiceConfigEntry>>(mut self, role: R, entry: E) -> Self {
        self.insert(role, entry);
        self
    }

    /// Configure `role` with a descriptor and settings
    pub fn with_settings<R: Into<String>, D: Into<ServiceDescriptor>>(
        self,
        role: R,
        descriptor: D,
        settings: ServiceSettings,
    ) -> Self {
        self.with(role, ServiceConfigEntry::with_settings(descriptor, settings))
    }

    /// Configure `role`
    ///
    /// Roles are unique; a second entry for the same role replaces the first.
    pub fn insert<R: Into<String>, E: Into<ServiceConfigEntry>>(&mut self, role: R, entry: E) {
        self.entries.insert(role.into(), entry.into());
    }

    /// Configured roles in order
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate `(role, entry)` pairs in role order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceConfigEntry)> {
        self.entries.iter().map(|(role, entry)| (role.as_str(), entry))
    }

    /// Number of configured roles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build state of a [`ServiceProvider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    /// No container yet, or the last build failed
    Unbuilt,
    /// A build is in progress
    Building,
    /// The container is built and cached
    Built,
}

/// Build a fully wired container without caching it
///
/// Every descriptor is turned into an instance before anything is registered,
/// so an unsupported name fails the build with nothing registered.
pub fn assemble(
    config: &ServiceConfig,
    catalog: &ServiceCatalog,
    defaults: &DefaultServices,
    options: &ContainerConfig,
) -> Result<ServiceContainer> {
    let normalized = config
        .iter()
        .map(|(role, entry)| normalize(role, entry.clone(), defaults))
        .collect::<Result<Vec<_>>>()?;

    let instances = normalized
        .into_iter()
        .map(|service| instantiate(service, catalog))
        .collect::<Result<Vec<_>>>()?;

    let mut container = ServiceContainer::with_policy(options.registration);
    for (role, instance, settings) in instances {
        container.register_with_settings(instance, &role, settings)?;
    }
    debug!(configured = container.len(), "Registered configured services");

    let mut resolver = DependencyResolver::new(catalog, defaults);
    if let Some(max_passes) = options.max_resolution_passes {
        resolver = resolver.with_max_passes(max_passes);
    }
    resolver.close(&mut container)?;

    container.inject_all()?;
    info!(services = container.len(), "Service container built");
    Ok(container)
}

fn instantiate(
    service: NormalizedService,
    catalog: &ServiceCatalog,
) -> Result<(String, Arc<dyn Service>, ServiceSettings)> {
    let NormalizedService {
        role,
        descriptor,
        settings,
    } = service;

    let instance = match descriptor {
        ServiceDescriptor::Instance(instance) => instance,
        ServiceDescriptor::Constructor(factory) => factory(),
        ServiceDescriptor::Name(name) => catalog.construct(&name)?,
    };
    Ok((role, instance, settings))
}

/// Lazily built, memoized service container
pub struct ServiceProvider {
    config: ServiceConfig,
    catalog: Arc<ServiceCatalog>,
    defaults: Arc<DefaultServices>,
    options: ContainerConfig,
    container: OnceCell<Arc<ServiceContainer>>,
    building: AtomicBool,
}

impl ServiceProvider {
    /// Create a provider over a configuration, catalog and default table
    pub fn new(
        config: ServiceConfig,
        catalog: Arc<ServiceCatalog>,
        defaults: Arc<DefaultServices>,
    ) -> Self {
        Self {
            config,
            catalog,
            defaults,
            options: ContainerConfig::default(),
            container: OnceCell::new(),
            building: AtomicBool::new(false),
        }
    }

    /// Set container build options
    pub fn with_options(mut self, options: ContainerConfig) -> Self {
        self.options = options;
        self
    }

    /// The configuration this provider builds from
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The catalog used for name descriptors and defaults
    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// Whether `name` is a catalog service
    pub fn supports(&self, name: &str) -> bool {
        self.catalog.supports(name)
    }

    /// Current build state
    pub fn state(&self) -> ProviderState {
        if self.container.get().is_some() {
            ProviderState::Built
        } else if self.building.load(Ordering::Acquire) {
            ProviderState::Building
        } else {
            ProviderState::Unbuilt
        }
    }

    /// The cached container, if built
    pub fn container(&self) -> Option<Arc<ServiceContainer>> {
        self.container.get().cloned()
    }

    /// Build the container, or return the cached one
    pub fn build_container(&self) -> Result<Arc<ServiceContainer>> {
        self.container
            .get_or_try_init(|| {
                let _building = BuildingFlag::raise(&self.building);
                debug!(roles = self.config.len(), "Building service container");
                assemble(&self.config, &self.catalog, &self.defaults, &self.options)
                    .map(Arc::new)
                    .inspect_err(|e| error!(error = %e, "Service container build failed"))
            })
            .cloned()
    }

    /// The service registered under `name`, building the container if needed
    pub fn service(&self, name: &str) -> Result<Arc<dyn Service>> {
        self.build_container()?.lookup(name)
    }

    /// The service registered under `name`, downcast to `T`
    pub fn service_as<T: Service>(&self, name: &str) -> Result<Arc<T>> {
        downcast_service(name, self.service(name)?)
    }
}

impl fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("roles", &self.config.roles().collect::<Vec<_>>())
            .field("state", &self.state())
            .finish()
    }
}

/// Holds the building flag up for the lifetime of a build attempt
struct BuildingFlag<'a>(&'a AtomicBool);

impl<'a> BuildingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for BuildingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
