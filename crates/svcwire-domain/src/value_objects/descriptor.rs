//! Service descriptors
//!
//! A descriptor is how configuration names the implementation for a role.

use std::fmt;
use std::sync::Arc;

use crate::ports::Service;

/// Zero-argument factory producing a fresh service instance
pub type ServiceFactory = fn() -> Arc<dyn Service>;

/// Factory for any `Default`-constructible service
pub fn construct_default<S: Service + Default>() -> Arc<dyn Service> {
    Arc::new(S::default())
}

/// The configured representation of a service
#[derive(Clone)]
pub enum ServiceDescriptor {
    /// An already constructed object, registered as-is
    Instance(Arc<dyn Service>),
    /// A zero-argument constructor the container calls
    Constructor(ServiceFactory),
    /// A canonical name looked up in the service catalog
    Name(String),
}

impl ServiceDescriptor {
    /// Descriptor for an existing instance
    pub fn instance<S: Service>(service: S) -> Self {
        Self::Instance(Arc::new(service))
    }

    /// Descriptor for a shared instance
    pub fn shared(service: Arc<dyn Service>) -> Self {
        Self::Instance(service)
    }

    /// Descriptor constructing `S` through `Default`
    pub fn constructor<S: Service + Default>() -> Self {
        Self::Constructor(construct_default::<S>)
    }

    /// Descriptor naming a catalog entry
    pub fn name<S: Into<String>>(name: S) -> Self {
        Self::Name(name.into())
    }

    /// Short label for the descriptor kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Instance(_) => "instance",
            Self::Constructor(_) => "constructor",
            Self::Name(_) => "name",
        }
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(service) => f
                .debug_tuple("Instance")
                .field(&service.service_name())
                .finish(),
            Self::Constructor(_) => f.write_str("Constructor(..)"),
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
        }
    }
}

impl From<&str> for ServiceDescriptor {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ServiceDescriptor {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Arc<dyn Service>> for ServiceDescriptor {
    fn from(service: Arc<dyn Service>) -> Self {
        Self::Instance(service)
    }
}

impl From<ServiceFactory> for ServiceDescriptor {
    fn from(factory: ServiceFactory) -> Self {
        Self::Constructor(factory)
    }
}
