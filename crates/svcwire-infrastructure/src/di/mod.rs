//! Service Container
//!
//! Turns a role → descriptor configuration into a fully wired set of
//! services.
//!
//! ```text
//! ServiceConfig
//!   │ normalizer   (role, entry) → (descriptor, settings)
//!   │ catalog      name → factory
//!   ▼
//! ServiceContainer ← resolver  registers defaults until no dependency is missing
//!   │ inject_all   configure(settings, locator) per service
//!   ▼
//! ServiceProvider::service("cache")
//! ```
//!
//! The catalog and the default table are plain values passed into the
//! provider, so tests can wire fake services without touching the
//! compile-time registry.

pub mod catalog;
pub mod container;
pub mod defaults;
pub mod normalizer;
pub mod provider;
pub mod resolver;

pub use catalog::ServiceCatalog;
pub use container::{RegistrationPolicy, ServiceContainer};
pub use defaults::DefaultServices;
pub use normalizer::{NormalizedService, normalize};
pub use provider::{ProviderState, ServiceConfig, ServiceProvider, assemble};
pub use resolver::{DependencyResolver, ResolutionReport, missing_dependencies};
