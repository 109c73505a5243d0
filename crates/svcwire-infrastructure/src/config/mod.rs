//! Configuration management
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [container]
//! registration = "reject"
//!
//! [services]
//! cache = ["CacheService", { ttl_secs = 60 }]
//! log = "NullLogger"
//! ```

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::{AppConfig, ContainerConfig, LoggingConfig, ServicesConfig};
