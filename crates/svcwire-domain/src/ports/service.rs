//! Service port
//!
//! Every service the container manages implements [`Service`]. A service is
//! built in two phases:
//!
//! ```text
//! construct (no dependencies) → register → configure(settings, locator)
//! ```
//!
//! Construction happens through a zero-argument factory, so a freshly built
//! service can only report *which* roles it needs. The container binds those
//! roles later, in the injection pass, by calling [`Service::configure`] with
//! a [`ServiceLocator`] over the fully resolved registry.

use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};

use crate::error::{Error, Result};
use crate::value_objects::ServiceSettings;

/// A configurable, dependency-aware service
///
/// Implementations hold any state bound during [`configure`](Service::configure)
/// behind interior mutability, because registered instances are shared as
/// `Arc<dyn Service>`.
pub trait Service: DowncastSync {
    /// Canonical service name, used in diagnostics
    fn service_name(&self) -> &str;

    /// Roles this service needs to function
    ///
    /// Queried only after construction. Order is irrelevant and duplicates are
    /// ignored by the container.
    fn dependencies(&self) -> Vec<String> {
        Vec::new()
    }

    /// Bind settings and dependencies
    ///
    /// Called once per container, after every transitive dependency has been
    /// registered.
    fn configure(&self, _settings: &ServiceSettings, _locator: &dyn ServiceLocator) -> Result<()> {
        Ok(())
    }
}

impl_downcast!(sync Service);

impl std::fmt::Debug for dyn Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("name", &self.service_name())
            .finish()
    }
}

/// Read access to registered services by role
pub trait ServiceLocator {
    /// Look up the instance registered under `role`
    fn locate(&self, role: &str) -> Result<Arc<dyn Service>>;

    /// Every registered role, in registration order
    fn registered_roles(&self) -> Vec<String>;
}

impl dyn ServiceLocator + '_ {
    /// Look up a role and downcast it to a concrete service type
    pub fn locate_as<T: Service>(&self, role: &str) -> Result<Arc<T>> {
        downcast_service(role, self.locate(role)?)
    }

    /// Whether `role` is registered
    pub fn has(&self, role: &str) -> bool {
        self.registered_roles().iter().any(|r| r == role)
    }
}

/// Downcast a shared service to its concrete type
pub fn downcast_service<T: Service>(role: &str, service: Arc<dyn Service>) -> Result<Arc<T>> {
    service
        .downcast_arc::<T>()
        .map_err(|_| Error::service_type_mismatch(role, std::any::type_name::<T>()))
}
