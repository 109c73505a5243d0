//! Service Registration Slices
//!
//! Services register themselves at compile time with `linkme` so the catalog
//! can be assembled without a hand-maintained list.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Service Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  1. Service crate:  #[linkme::distributed_slice(SERVICE_ENTRIES)]│
//! │                     static ENTRY: ServiceEntry = ...             │
//! │  2. Infrastructure: ServiceCatalog::from_registry()              │
//! │  3. Config selects: "cache = CacheService" → factory()           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Registering a service
//!
//! ```ignore
//! use svcwire_domain::registry::{SERVICE_ENTRIES, ServiceEntry};
//!
//! #[linkme::distributed_slice(SERVICE_ENTRIES)]
//! static TIMER_SERVICE: ServiceEntry = ServiceEntry {
//!     name: "TimerService",
//!     description: "Named monotonic timers",
//!     factory: construct_default::<TimerService>,
//! };
//! ```

use crate::value_objects::ServiceFactory;

/// Catalog entry for a constructible service
#[derive(Debug, Clone, Copy)]
pub struct ServiceEntry {
    /// Canonical service name (e.g., "CacheService")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Zero-argument factory
    pub factory: ServiceFactory,
}

/// Default implementation for a dependency role
#[derive(Debug, Clone, Copy)]
pub struct DefaultServiceEntry {
    /// Role name a service may depend on (e.g., "timer")
    pub role: &'static str,
    /// Canonical service name used when the role is not configured
    pub service: &'static str,
}

/// Every service linked into the binary
#[linkme::distributed_slice]
pub static SERVICE_ENTRIES: [ServiceEntry] = [..];

/// Every default role binding linked into the binary
#[linkme::distributed_slice]
pub static DEFAULT_SERVICES: [DefaultServiceEntry] = [..];
