//! Logger service
//!
//! A small logging facade other services depend on through the `log` role.
//! `ConsoleLogger` forwards to `tracing`; `NullLogger` discards everything.
//! Both are the same type so dependents can downcast the role to
//! [`LogService`] whichever one is configured.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use svcwire_domain::registry::{DEFAULT_SERVICES, DefaultServiceEntry, SERVICE_ENTRIES, ServiceEntry};
use svcwire_domain::{Result, Service, ServiceLocator, ServiceSettings};
use tracing::{debug, error, info, warn};

use crate::constants::{CONSOLE_LOGGER, LOG_ROLE, LOG_TARGET, NULL_LOGGER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogSink {
    Console,
    Null,
}

/// Severity of a logged message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Logging facade bound to the `log` role
#[derive(Debug)]
pub struct LogService {
    sink: LogSink,
    prefix: RwLock<String>,
    emitted: AtomicUsize,
}

impl LogService {
    fn with_sink(sink: LogSink) -> Self {
        Self {
            sink,
            prefix: RwLock::new(String::new()),
            emitted: AtomicUsize::new(0),
        }
    }

    /// Logger that forwards to `tracing`
    pub fn console() -> Self {
        Self::with_sink(LogSink::Console)
    }

    /// Logger that discards every message
    pub fn null() -> Self {
        Self::with_sink(LogSink::Null)
    }

    /// Whether messages are discarded
    pub fn is_null(&self) -> bool {
        self.sink == LogSink::Null
    }

    /// Prefix prepended to every message
    pub fn prefix(&self) -> String {
        self.prefix
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of messages forwarded to the sink
    pub fn emitted(&self) -> usize {
        self.emitted.load(Ordering::Relaxed)
    }

    /// Log a message at `level`
    pub fn log(&self, level: LogLevel, message: &str) {
        if self.is_null() {
            return;
        }
        let prefix = self.prefix();
        match level {
            LogLevel::Debug => debug!(target: LOG_TARGET, "{}{}", prefix, message),
            LogLevel::Info => info!(target: LOG_TARGET, "{}{}", prefix, message),
            LogLevel::Warn => warn!(target: LOG_TARGET, "{}{}", prefix, message),
            LogLevel::Error => error!(target: LOG_TARGET, "{}{}", prefix, message),
        }
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Log at debug level
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log at info level
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log at warn level
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Log at error level
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl Service for LogService {
    fn service_name(&self) -> &str {
        match self.sink {
            LogSink::Console => CONSOLE_LOGGER,
            LogSink::Null => NULL_LOGGER,
        }
    }

    fn configure(&self, settings: &ServiceSettings, _locator: &dyn ServiceLocator) -> Result<()> {
        let prefix: String = settings.get_or("prefix", String::new())?;
        *self.prefix.write().unwrap_or_else(PoisonError::into_inner) = prefix;
        Ok(())
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(SERVICE_ENTRIES)]
static CONSOLE_LOGGER_ENTRY: ServiceEntry = ServiceEntry {
    name: CONSOLE_LOGGER,
    description: "Logger forwarding to tracing",
    factory: || Arc::new(LogService::console()),
};

#[linkme::distributed_slice(SERVICE_ENTRIES)]
static NULL_LOGGER_ENTRY: ServiceEntry = ServiceEntry {
    name: NULL_LOGGER,
    description: "Logger discarding every message",
    factory: || Arc::new(LogService::null()),
};

#[linkme::distributed_slice(DEFAULT_SERVICES)]
static LOG_DEFAULT: DefaultServiceEntry = DefaultServiceEntry {
    role: LOG_ROLE,
    service: CONSOLE_LOGGER,
};
