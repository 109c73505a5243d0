//! Provider Constants

// ============================================================================
// ROLE NAMES
// ============================================================================

/// Role bound to the timer service by default
pub const TIMER_ROLE: &str = "timer";

/// Role bound to the cache service by default
pub const CACHE_ROLE: &str = "cache";

/// Role bound to the logger by default
pub const LOG_ROLE: &str = "log";

/// Role bound to the event bus by default
pub const EVENT_ROLE: &str = "event";

// ============================================================================
// SERVICE NAMES
// ============================================================================

/// Catalog name of the timer service
pub const TIMER_SERVICE: &str = "TimerService";

/// Catalog name of the cache service
pub const CACHE_SERVICE: &str = "CacheService";

/// Catalog name of the tracing-backed logger
pub const CONSOLE_LOGGER: &str = "ConsoleLogger";

/// Catalog name of the discarding logger
pub const NULL_LOGGER: &str = "NullLogger";

/// Catalog name of the broadcast event bus
pub const EVENT_SERVICE: &str = "EventService";

/// Catalog name of the discarding event bus
pub const NULL_EVENT_SERVICE: &str = "NullEventService";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default time-to-live for cache entries in seconds
pub const CACHE_DEFAULT_TTL_SECS: u64 = 3600;

/// Default maximum number of cache entries
pub const CACHE_DEFAULT_MAX_ENTRIES: usize = 10_000;

// ============================================================================
// EVENT CONSTANTS
// ============================================================================

/// Default broadcast channel capacity
pub const EVENT_DEFAULT_CAPACITY: usize = 1024;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Tracing target used by the console logger
pub const LOG_TARGET: &str = "svcwire::service";
