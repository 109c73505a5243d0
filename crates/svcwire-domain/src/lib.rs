//! # svcwire domain layer
//!
//! Types shared by every layer of the service container:
//!
//! - [`error`] - the error taxonomy and `Result` alias
//! - [`ports`] - the [`Service`] and [`ServiceLocator`] contracts
//! - [`value_objects`] - descriptors, settings and raw configuration entries
//! - [`registry`] - compile-time catalog slices services register into

pub mod error;
pub mod ports;
pub mod registry;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Service, ServiceLocator, downcast_service};
pub use registry::{DEFAULT_SERVICES, DefaultServiceEntry, SERVICE_ENTRIES, ServiceEntry};
pub use value_objects::{
    ServiceConfigEntry, ServiceConfigValue, ServiceDescriptor, ServiceFactory, ServiceSettings,
    construct_default,
};
