//! Service Catalog
//!
//! Maps canonical service names to zero-argument factories. The catalog is
//! read-only once built and carries no instance state.
//!
//! ```text
//! linkme (compile-time)        ServiceCatalog (runtime)
//! ─────────────────────        ────────────────────────
//! SERVICE_ENTRIES        →     ServiceCatalog::from_registry()
//!                                     ↓
//!                              catalog.construct("CacheService")
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use svcwire_domain::error::{Error, Result};
use svcwire_domain::ports::Service;
use svcwire_domain::registry::{SERVICE_ENTRIES, ServiceEntry};
use svcwire_domain::value_objects::{ServiceFactory, construct_default};

/// Static mapping from canonical service name to its factory
#[derive(Clone, Default)]
pub struct ServiceCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

#[derive(Clone)]
struct CatalogEntry {
    description: String,
    factory: ServiceFactory,
}

impl ServiceCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from every service registered in [`SERVICE_ENTRIES`]
    pub fn from_registry() -> Self {
        Self::from_entries(SERVICE_ENTRIES.iter())
    }

    /// Build a catalog from explicit registry entries
    ///
    /// When two entries share a name the first one wins.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a ServiceEntry>,
    {
        let mut catalog = Self::new();
        for entry in entries {
            catalog
                .entries
                .entry(entry.name.to_string())
                .or_insert_with(|| CatalogEntry {
                    description: entry.description.to_string(),
                    factory: entry.factory,
                });
        }
        catalog
    }

    /// Add a factory under `name`, replacing any previous entry
    pub fn with_factory<N: Into<String>>(mut self, name: N, factory: ServiceFactory) -> Self {
        self.insert(name, "", factory);
        self
    }

    /// Add a `Default`-constructible service under `name`
    pub fn with_service<S: Service + Default, N: Into<String>>(self, name: N) -> Self {
        self.with_factory(name, construct_default::<S>)
    }

    /// Insert an entry with a description
    pub fn insert<N: Into<String>, D: Into<String>>(
        &mut self,
        name: N,
        description: D,
        factory: ServiceFactory,
    ) {
        self.entries.insert(
            name.into(),
            CatalogEntry {
                description: description.into(),
                factory,
            },
        );
    }

    /// Whether `name` has a catalog entry
    pub fn supports(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The factory for `name`
    pub fn factory(&self, name: &str) -> Result<ServiceFactory> {
        self.entries
            .get(name)
            .map(|entry| entry.factory)
            .ok_or_else(|| Error::unsupported_service(name))
    }

    /// Construct a fresh instance of `name`
    pub fn construct(&self, name: &str) -> Result<Arc<dyn Service>> {
        Ok((self.factory(name)?)())
    }

    /// Description of `name`, if registered
    pub fn describe(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|entry| entry.description.as_str())
    }

    /// Every catalog name in lexicographic order
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ServiceCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCatalog")
            .field("services", &self.names())
            .finish()
    }
}

impl fmt::Display for ServiceCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Services:")?;
        for (name, entry) in &self.entries {
            if entry.description.is_empty() {
                writeln!(f, "  - {name}")?;
            } else {
                writeln!(f, "  - {name}: {}", entry.description)?;
            }
        }
        Ok(())
    }
}
