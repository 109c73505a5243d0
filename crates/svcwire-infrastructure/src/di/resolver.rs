//! Dependency Resolver
//!
//! Closes the dependency graph of a container by registering the default
//! implementation of every role some registered service needs but nobody
//! configured.
//!
//! ```text
//! known   = registered roles
//! missing = ⋃ dependencies(service) − known
//!           │
//!           ├── empty      → fixpoint, done
//!           └── non-empty  → defaults[name] → catalog → register → repeat
//! ```
//!
//! Each pass registers at least one role from the finite default table, so the
//! loop settles in at most `defaults.len()` registering passes. The pass cap
//! turns anything else into `DependencyResolution` instead of looping forever.

use std::collections::BTreeSet;
use std::sync::Arc;

use svcwire_domain::error::{Error, Result};
use svcwire_domain::ports::Service;
use tracing::{debug, info};

use super::catalog::ServiceCatalog;
use super::container::ServiceContainer;
use super::defaults::DefaultServices;

/// Outcome of a successful resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Passes that registered at least one service
    pub passes: usize,
    /// Roles registered by the resolver, in registration order
    pub registered: Vec<String>,
}

/// Dependencies declared by registered services but not registered themselves
///
/// Returned in lexicographic order.
pub fn missing_dependencies(container: &ServiceContainer) -> BTreeSet<String> {
    container
        .services()
        .flat_map(|(_, service)| service.dependencies())
        .filter(|name| !container.contains(name))
        .collect()
}

/// Registers default implementations until no dependency is missing
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'a> {
    catalog: &'a ServiceCatalog,
    defaults: &'a DefaultServices,
    max_passes: Option<usize>,
}

impl<'a> DependencyResolver<'a> {
    /// Create a resolver over a catalog and default table
    pub fn new(catalog: &'a ServiceCatalog, defaults: &'a DefaultServices) -> Self {
        Self {
            catalog,
            defaults,
            max_passes: None,
        }
    }

    /// Override the registering-pass cap
    ///
    /// Defaults to one more than the size of the default table.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    /// Effective registering-pass cap
    pub fn max_passes(&self) -> usize {
        self.max_passes.unwrap_or(self.defaults.len() + 1)
    }

    /// Register missing dependencies until the container reaches a fixpoint
    ///
    /// A pass instantiates every missing role before registering any of them,
    /// so a failure leaves that pass's roles unregistered.
    pub fn close(&self, container: &mut ServiceContainer) -> Result<ResolutionReport> {
        let max_passes = self.max_passes();
        let mut report = ResolutionReport::default();

        loop {
            let missing = missing_dependencies(container);
            if missing.is_empty() {
                info!(
                    passes = report.passes,
                    registered = report.registered.len(),
                    "Dependency resolution reached fixpoint"
                );
                return Ok(report);
            }

            if report.passes >= max_passes {
                return Err(Error::dependency_resolution(report.passes, missing));
            }
            report.passes += 1;
            debug!(pass = report.passes, missing = ?missing, "Resolving dependencies");

            let resolved = missing
                .into_iter()
                .map(|name| {
                    let instance = self.instantiate(&name)?;
                    Ok((name, instance))
                })
                .collect::<Result<Vec<_>>>()?;

            for (name, instance) in resolved {
                container.register(instance, &name)?;
                report.registered.push(name);
            }
        }
    }

    /// Construct the default implementation for a dependency role
    pub fn instantiate(&self, role: &str) -> Result<Arc<dyn Service>> {
        let service = self
            .defaults
            .service_for(role)
            .ok_or_else(|| Error::no_default_service(role))?;
        debug!(role, service, "Instantiating default service");
        self.catalog.construct(service)
    }
}
