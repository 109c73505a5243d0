//! # svcwire infrastructure layer
//!
//! - [`di`] - catalog, registry, dependency resolver and the memoizing provider
//! - [`config`] - Figment-based configuration loading
//! - [`logging`] - tracing subscriber setup
//! - [`error_ext`] - context helpers for foreign errors

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, ContainerConfig, LoggingConfig, ServicesConfig};
pub use di::{
    DefaultServices, DependencyResolver, ProviderState, RegistrationPolicy, ResolutionReport,
    ServiceCatalog, ServiceConfig, ServiceContainer, ServiceProvider, assemble,
};
