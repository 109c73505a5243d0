//! Timer service
//!
//! Named stopwatches over a monotonic clock. The clock is shared with other
//! services (the cache reads it for expiry) and can be advanced by hand,
//! which keeps time-dependent behaviour deterministic in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use svcwire_domain::Service;
use svcwire_domain::registry::{DEFAULT_SERVICES, DefaultServiceEntry, SERVICE_ENTRIES, ServiceEntry};
use svcwire_domain::value_objects::construct_default;

use crate::constants::{TIMER_ROLE, TIMER_SERVICE};

/// Monotonic clock with named timers
#[derive(Debug)]
pub struct TimerService {
    origin: Instant,
    /// Manual offset added to the real clock, in nanoseconds
    offset_nanos: AtomicU64,
    timers: DashMap<String, Duration>,
}

impl Default for TimerService {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerService {
    /// Create a timer service whose clock starts at zero
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset_nanos: AtomicU64::new(0),
            timers: DashMap::new(),
        }
    }

    /// Time elapsed since the service was created, including manual advances
    pub fn now(&self) -> Duration {
        self.origin
            .elapsed()
            .saturating_add(Duration::from_nanos(self.offset_nanos.load(Ordering::Relaxed)))
    }

    /// Move the clock forward
    ///
    /// The offset saturates instead of wrapping, so the clock never runs
    /// backwards.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        // The closure always returns Some, so the update cannot fail
        let _ = self
            .offset_nanos
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(current.saturating_add(nanos))
            });
    }

    /// Start (or restart) a named timer
    pub fn start(&self, name: &str) {
        self.timers.insert(name.to_string(), self.now());
    }

    /// Time since `name` was started, if it is running
    pub fn elapsed(&self, name: &str) -> Option<Duration> {
        let started = *self.timers.get(name)?;
        Some(self.now().saturating_sub(started))
    }

    /// Stop a named timer and return its final reading
    pub fn stop(&self, name: &str) -> Option<Duration> {
        let (_, started) = self.timers.remove(name)?;
        Some(self.now().saturating_sub(started))
    }

    /// Whether `name` is running
    pub fn is_running(&self, name: &str) -> bool {
        self.timers.contains_key(name)
    }

    /// Names of every running timer, sorted
    pub fn running(&self) -> Vec<String> {
        let mut names: Vec<String> = self.timers.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl Service for TimerService {
    fn service_name(&self) -> &str {
        TIMER_SERVICE
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(SERVICE_ENTRIES)]
static TIMER_ENTRY: ServiceEntry = ServiceEntry {
    name: TIMER_SERVICE,
    description: "Named timers over a monotonic clock",
    factory: construct_default::<TimerService>,
};

#[linkme::distributed_slice(DEFAULT_SERVICES)]
static TIMER_DEFAULT: DefaultServiceEntry = DefaultServiceEntry {
    role: TIMER_ROLE,
    service: TIMER_SERVICE,
};
