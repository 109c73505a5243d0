//! Value objects shared between configuration and the container

/// Raw configuration entries
pub mod config_entry;
/// Service descriptors
pub mod descriptor;
/// Per-service settings
pub mod settings;

pub use config_entry::{ServiceConfigEntry, ServiceConfigValue};
pub use descriptor::{ServiceDescriptor, ServiceFactory, construct_default};
pub use settings::ServiceSettings;
