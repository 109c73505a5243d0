//! Cache service
//!
//! In-memory key/value cache with per-entry time-to-live. Values are stored
//! as JSON so any serializable type can be cached. Expiry is measured on the
//! clock of the service bound to the `timer` role.
//!
//! ## Settings
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `ttl_secs` | 3600 | Lifetime of an entry, `0` disables expiry |
//! | `max_entries` | 10000 | Capacity; the oldest entry is evicted when full |

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use dashmap::DashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use svcwire_domain::registry::{DEFAULT_SERVICES, DefaultServiceEntry, SERVICE_ENTRIES, ServiceEntry};
use svcwire_domain::value_objects::construct_default;
use svcwire_domain::{Error, Result, Service, ServiceLocator, ServiceSettings};
use tracing::debug;

use crate::constants::{
    CACHE_DEFAULT_MAX_ENTRIES, CACHE_DEFAULT_TTL_SECS, CACHE_ROLE, CACHE_SERVICE, TIMER_ROLE,
};
use crate::timer::TimerService;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    inserted_at: Duration,
    expires_at: Option<Duration>,
}

/// Capacity and lifetime limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLimits {
    /// Entry lifetime, `None` when entries never expire
    pub ttl: Option<Duration>,
    /// Maximum number of live entries
    pub max_entries: usize,
}

impl Default for CacheLimits {
    fn default() -> Self {
        Self {
            ttl: Some(Duration::from_secs(CACHE_DEFAULT_TTL_SECS)),
            max_entries: CACHE_DEFAULT_MAX_ENTRIES,
        }
    }
}

/// TTL cache bound to the `cache` role
#[derive(Debug, Default)]
pub struct CacheService {
    entries: DashMap<String, CacheEntry>,
    limits: RwLock<CacheLimits>,
    timer: RwLock<Option<Arc<TimerService>>>,
}

impl CacheService {
    /// Current limits
    pub fn limits(&self) -> CacheLimits {
        *self.limits.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// The timer this cache reads its clock from
    pub fn timer(&self) -> Result<Arc<TimerService>> {
        self.timer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| Error::service(CACHE_ROLE, "timer dependency is not bound"))
    }

    /// Store a value under `key`, replacing any previous value
    pub fn set<V: Serialize + ?Sized>(&self, key: &str, value: &V) -> Result<()> {
        let now = self.timer()?.now();
        let limits = self.limits();
        let value = serde_json::to_value(value)?;

        if !self.entries.contains_key(key) && self.entries.len() >= limits.max_entries {
            self.purge_expired_at(now);
            if self.entries.len() >= limits.max_entries {
                self.evict_oldest();
            }
        }

        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: now,
                // A deadline past the end of the clock never expires
                expires_at: limits.ttl.and_then(|ttl| now.checked_add(ttl)),
            },
        );
        Ok(())
    }

    /// Read the value under `key`
    ///
    /// Expired entries are dropped on access and read as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Read the stored JSON under `key`
    pub fn get_raw(&self, key: &str) -> Result<Option<Value>> {
        let now = self.timer()?.now();
        let value = match self.entries.get(key) {
            Some(entry) if !is_expired(&entry, now) => Some(entry.value.clone()),
            Some(_) => None,
            None => return Ok(None),
        };
        if value.is_none() {
            self.entries.remove_if(key, |_, entry| is_expired(entry, now));
        }
        Ok(value)
    }

    /// Whether a live entry exists under `key`
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get_raw(key)?.is_some())
    }

    /// Remove `key`, returning whether a live entry was removed
    pub fn remove(&self, key: &str) -> Result<bool> {
        let now = self.timer()?.now();
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, entry)| !is_expired(&entry, now)))
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> Result<usize> {
        let now = self.timer()?.now();
        Ok(self.purge_expired_at(now))
    }

    /// Number of stored entries, expired ones included until purged
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge_expired_at(&self, now: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !is_expired(entry, now));
        before - self.entries.len()
    }

    fn evict_oldest(&self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.inserted_at)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            debug!(key = %key, "Cache full, evicting oldest entry");
            self.entries.remove(&key);
        }
    }
}

fn is_expired(entry: &CacheEntry, now: Duration) -> bool {
    entry.expires_at.is_some_and(|at| now >= at)
}

impl Service for CacheService {
    fn service_name(&self) -> &str {
        CACHE_SERVICE
    }

    fn dependencies(&self) -> Vec<String> {
        vec![TIMER_ROLE.to_string()]
    }

    fn configure(&self, settings: &ServiceSettings, locator: &dyn ServiceLocator) -> Result<()> {
        let ttl_secs: u64 = settings.get_or("ttl_secs", CACHE_DEFAULT_TTL_SECS)?;
        let max_entries: usize = settings.get_or("max_entries", CACHE_DEFAULT_MAX_ENTRIES)?;
        if max_entries == 0 {
            return Err(Error::service(CACHE_ROLE, "max_entries must be positive"));
        }

        let timer = locator.locate_as::<TimerService>(TIMER_ROLE)?;

        *self.limits.write().unwrap_or_else(PoisonError::into_inner) = CacheLimits {
            ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
            max_entries,
        };
        *self.timer.write().unwrap_or_else(PoisonError::into_inner) = Some(timer);
        Ok(())
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(SERVICE_ENTRIES)]
static CACHE_ENTRY: ServiceEntry = ServiceEntry {
    name: CACHE_SERVICE,
    description: "TTL key/value cache",
    factory: construct_default::<CacheService>,
};

#[linkme::distributed_slice(DEFAULT_SERVICES)]
static CACHE_DEFAULT: DefaultServiceEntry = DefaultServiceEntry {
    role: CACHE_ROLE,
    service: CACHE_SERVICE,
};
