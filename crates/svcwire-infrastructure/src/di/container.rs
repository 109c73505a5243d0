//! Service Registry
//!
//! Live mapping from role name to service instance. The table only grows while
//! the container is being built; once the injection pass has run it is treated
//! as read-only.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use svcwire_domain::error::{Error, Result};
use svcwire_domain::ports::{Service, ServiceLocator, downcast_service};
use svcwire_domain::value_objects::ServiceSettings;
use tracing::{debug, error, warn};

/// What [`ServiceContainer::register`] does when the role already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationPolicy {
    /// Fail with `DuplicateRole`
    #[default]
    Reject,
    /// Replace the existing instance
    Override,
}

struct RegisteredService {
    role: String,
    instance: Arc<dyn Service>,
    settings: ServiceSettings,
}

/// Registry of service instances keyed by role
#[derive(Default)]
pub struct ServiceContainer {
    entries: Vec<RegisteredService>,
    index: HashMap<String, usize>,
    policy: RegistrationPolicy,
    injected: bool,
}

impl ServiceContainer {
    /// Create an empty container that rejects duplicate roles
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty container with the given duplicate-role policy
    pub fn with_policy(policy: RegistrationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The duplicate-role policy in effect
    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    /// Register `instance` under `role` with empty settings
    pub fn register(&mut self, instance: Arc<dyn Service>, role: &str) -> Result<()> {
        self.register_with_settings(instance, role, ServiceSettings::default())
    }

    /// Register `instance` under `role` with the settings it is configured with
    pub fn register_with_settings(
        &mut self,
        instance: Arc<dyn Service>,
        role: &str,
        settings: ServiceSettings,
    ) -> Result<()> {
        if self.index.contains_key(role) && self.policy == RegistrationPolicy::Reject {
            return Err(Error::duplicate_role(role));
        }
        self.insert(instance, role, settings);
        Ok(())
    }

    /// Register `instance` under `role`, replacing any existing entry
    ///
    /// The replaced entry keeps its position in registration order.
    pub fn register_override(
        &mut self,
        instance: Arc<dyn Service>,
        role: &str,
        settings: ServiceSettings,
    ) {
        self.insert(instance, role, settings);
    }

    fn insert(&mut self, instance: Arc<dyn Service>, role: &str, settings: ServiceSettings) {
        let entry = RegisteredService {
            role: role.to_string(),
            instance,
            settings,
        };

        if let Some(&position) = self.index.get(role) {
            warn!(
                role,
                previous = self.entries[position].instance.service_name(),
                replacement = entry.instance.service_name(),
                "Overriding registered service"
            );
            self.entries[position] = entry;
        } else {
            debug!(role, service = entry.instance.service_name(), "Registered service");
            self.index.insert(entry.role.clone(), self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Every registered role
    pub fn registered_names(&self) -> BTreeSet<String> {
        self.index.keys().cloned().collect()
    }

    /// Registered roles in registration order
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.role.as_str())
    }

    /// Registered `(role, instance)` pairs in registration order
    pub fn services(&self) -> impl Iterator<Item = (&str, &Arc<dyn Service>)> {
        self.entries
            .iter()
            .map(|entry| (entry.role.as_str(), &entry.instance))
    }

    /// Whether `role` is registered
    pub fn contains(&self, role: &str) -> bool {
        self.index.contains_key(role)
    }

    /// The instance registered under `role`
    pub fn lookup(&self, role: &str) -> Result<Arc<dyn Service>> {
        self.index
            .get(role)
            .map(|&position| Arc::clone(&self.entries[position].instance))
            .ok_or_else(|| Error::unknown_service(role))
    }

    /// The instance registered under `role`, downcast to `T`
    pub fn lookup_as<T: Service>(&self, role: &str) -> Result<Arc<T>> {
        downcast_service(role, self.lookup(role)?)
    }

    /// Settings captured for `role`
    pub fn settings_for(&self, role: &str) -> Option<&ServiceSettings> {
        self.index
            .get(role)
            .map(|&position| &self.entries[position].settings)
    }

    /// Configure every registered instance, in registration order
    ///
    /// Each instance receives its settings and this container as its locator.
    /// Must run after dependency resolution has reached a fixpoint. Runs at
    /// most once; later calls do nothing.
    pub fn inject_all(&mut self) -> Result<()> {
        if self.injected {
            debug!("Injection pass already ran");
            return Ok(());
        }

        for entry in &self.entries {
            debug!(role = %entry.role, "Configuring service");
            if let Err(e) = entry.instance.configure(&entry.settings, &*self) {
                error!(role = %entry.role, error = %e, "Service configuration failed");
                return Err(e);
            }
        }

        self.injected = true;
        Ok(())
    }

    /// Whether the injection pass has run
    pub fn is_injected(&self) -> bool {
        self.injected
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ServiceLocator for ServiceContainer {
    fn locate(&self, role: &str) -> Result<Arc<dyn Service>> {
        self.lookup(role)
    }

    fn registered_roles(&self) -> Vec<String> {
        self.roles().map(str::to_string).collect()
    }
}

impl fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceContainer")
            .field(
                "services",
                &self
                    .entries
                    .iter()
                    .map(|e| (e.role.as_str(), e.instance.service_name()))
                    .collect::<Vec<_>>(),
            )
            .field("policy", &self.policy)
            .field("injected", &self.injected)
            .finish()
    }
}
