//! Event bus service
//!
//! In-process publish/subscribe over `tokio::sync::broadcast`. Every
//! subscriber sees every event emitted after it subscribed; when a
//! subscriber falls more than `capacity` events behind, the oldest events
//! are dropped for it.
//!
//! `NullEventService` is the same type with broadcasting disabled, so code
//! depending on the `event` role can always downcast to [`EventService`].
//!
//! ## Example
//!
//! ```ignore
//! let events = provider.service_as::<EventService>("event")?;
//! let mut rx = events.subscribe();
//! events.emit("cache.cleared", serde_json::json!({ "entries": 12 }));
//! let event = rx.recv().await?;
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use svcwire_domain::registry::{DEFAULT_SERVICES, DefaultServiceEntry, SERVICE_ENTRIES, ServiceEntry};
use svcwire_domain::{Error, Result, Service, ServiceLocator, ServiceSettings};
use tokio::sync::broadcast;
use tracing::debug;

use crate::constants::{EVENT_DEFAULT_CAPACITY, EVENT_ROLE, EVENT_SERVICE, LOG_ROLE, NULL_EVENT_SERVICE};
use crate::log::LogService;

/// An event published on the bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEvent {
    /// Event kind, e.g. `"cache.cleared"`
    pub kind: String,
    /// Arbitrary payload
    pub payload: Value,
}

/// Broadcast event bus bound to the `event` role
pub struct EventService {
    enabled: bool,
    sender: RwLock<broadcast::Sender<ServiceEvent>>,
    capacity: RwLock<usize>,
    logger: RwLock<Option<Arc<LogService>>>,
}

impl Default for EventService {
    fn default() -> Self {
        Self::new()
    }
}

impl EventService {
    fn build(enabled: bool) -> Self {
        let (sender, _) = broadcast::channel(EVENT_DEFAULT_CAPACITY);
        Self {
            enabled,
            sender: RwLock::new(sender),
            capacity: RwLock::new(EVENT_DEFAULT_CAPACITY),
            logger: RwLock::new(None),
        }
    }

    /// Create a broadcasting event bus with default capacity (1024)
    pub fn new() -> Self {
        Self::build(true)
    }

    /// Create an event bus that discards every event
    pub fn null() -> Self {
        Self::build(false)
    }

    /// Whether events are discarded
    pub fn is_null(&self) -> bool {
        !self.enabled
    }

    /// Channel capacity
    pub fn capacity(&self) -> usize {
        *self.capacity.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish an event, returning how many subscribers received it
    pub fn emit<K: Into<String>>(&self, kind: K, payload: Value) -> usize {
        if !self.enabled {
            return 0;
        }
        let event = ServiceEvent {
            kind: kind.into(),
            payload,
        };
        if let Some(logger) = self.logger() {
            logger.debug(&format!("event emitted: {}", event.kind));
        }
        let sender = self.sender.read().unwrap_or_else(PoisonError::into_inner);
        match sender.send(event) {
            Ok(count) => count,
            Err(_) => {
                debug!("Published event but no subscribers");
                0
            }
        }
    }

    /// Subscribe to events emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<ServiceEvent> {
        self.sender
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .receiver_count()
    }

    /// The logger bound during configuration, if any
    pub fn logger(&self) -> Option<Arc<LogService>> {
        self.logger
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for EventService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventService")
            .field("enabled", &self.enabled)
            .field("capacity", &self.capacity())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl Service for EventService {
    fn service_name(&self) -> &str {
        if self.enabled {
            EVENT_SERVICE
        } else {
            NULL_EVENT_SERVICE
        }
    }

    fn dependencies(&self) -> Vec<String> {
        if self.enabled {
            vec![LOG_ROLE.to_string()]
        } else {
            Vec::new()
        }
    }

    fn configure(&self, settings: &ServiceSettings, locator: &dyn ServiceLocator) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let capacity: usize = settings.get_or("capacity", EVENT_DEFAULT_CAPACITY)?;
        if capacity == 0 {
            return Err(Error::service(EVENT_ROLE, "capacity must be positive"));
        }
        let logger = locator.locate_as::<LogService>(LOG_ROLE)?;

        // Existing subscribers keep the old channel, so only rebuild on change
        let mut current = self.capacity.write().unwrap_or_else(PoisonError::into_inner);
        if *current != capacity {
            let (sender, _) = broadcast::channel(capacity);
            *self.sender.write().unwrap_or_else(PoisonError::into_inner) = sender;
            *current = capacity;
        }
        *self.logger.write().unwrap_or_else(PoisonError::into_inner) = Some(logger);
        Ok(())
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(SERVICE_ENTRIES)]
static EVENT_SERVICE_ENTRY: ServiceEntry = ServiceEntry {
    name: EVENT_SERVICE,
    description: "In-process broadcast event bus",
    factory: || Arc::new(EventService::new()),
};

#[linkme::distributed_slice(SERVICE_ENTRIES)]
static NULL_EVENT_SERVICE_ENTRY: ServiceEntry = ServiceEntry {
    name: NULL_EVENT_SERVICE,
    description: "Event bus discarding every event",
    factory: || Arc::new(EventService::null()),
};

#[linkme::distributed_slice(DEFAULT_SERVICES)]
static EVENT_DEFAULT: DefaultServiceEntry = DefaultServiceEntry {
    role: EVENT_ROLE,
    service: EVENT_SERVICE,
};
