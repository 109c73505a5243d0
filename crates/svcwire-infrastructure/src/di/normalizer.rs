//! Configuration Normalizer
//!
//! Turns a raw configuration entry into a canonical `(descriptor, settings)`
//! pair. Settings are never inspected here.

use svcwire_domain::error::{Error, Result};
use svcwire_domain::value_objects::{ServiceConfigEntry, ServiceDescriptor, ServiceSettings};

use super::defaults::DefaultServices;

/// A role's descriptor and settings after normalization
#[derive(Debug, Clone)]
pub struct NormalizedService {
    /// Role the service is registered under
    pub role: String,
    /// How to obtain the instance
    pub descriptor: ServiceDescriptor,
    /// Settings handed to the service during injection
    pub settings: ServiceSettings,
}

/// Normalize one configuration entry
///
/// `defaults` is consulted only for [`ServiceConfigEntry::RoleDefault`]
/// entries, which fail with `NoDefaultService` when the role has no binding.
pub fn normalize(
    role: &str,
    entry: ServiceConfigEntry,
    defaults: &DefaultServices,
) -> Result<NormalizedService> {
    let (descriptor, settings) = match entry {
        ServiceConfigEntry::Bare(descriptor) => (descriptor, ServiceSettings::default()),
        ServiceConfigEntry::Pair(descriptor, settings) => (descriptor, settings.unwrap_or_default()),
        ServiceConfigEntry::RoleDefault(settings) => {
            let name = defaults
                .service_for(role)
                .ok_or_else(|| Error::no_default_service(role))?;
            (ServiceDescriptor::name(name), settings)
        }
    };

    Ok(NormalizedService {
        role: role.to_string(),
        descriptor,
        settings,
    })
}
