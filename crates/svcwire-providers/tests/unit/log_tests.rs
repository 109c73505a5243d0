//! Logger Service Tests

use std::sync::Arc;

use svcwire_domain::{Service, ServiceSettings};
use svcwire_infrastructure::ServiceContainer;
use svcwire_providers::{LogLevel, LogService};

#[test]
fn test_console_and_null_names() {
    assert_eq!(LogService::console().service_name(), "ConsoleLogger");
    assert_eq!(LogService::null().service_name(), "NullLogger");
    assert!(LogService::null().is_null());
    assert!(LogService::console().dependencies().is_empty());
}

#[test]
fn test_console_logger_forwards_messages() {
    let logger = LogService::console();
    logger.info("started");
    logger.warn("slow");
    logger.log(LogLevel::Error, "failed");
    assert_eq!(logger.emitted(), 3);
}

#[test]
fn test_null_logger_discards_messages() {
    let logger = LogService::null();
    logger.info("ignored");
    logger.error("ignored");
    assert_eq!(logger.emitted(), 0);
}

#[test]
fn test_prefix_setting_is_applied() {
    let logger = Arc::new(LogService::console());
    let mut container = ServiceContainer::new();
    container
        .register_with_settings(
            logger.clone(),
            "log",
            ServiceSettings::new().with("prefix", "[svc] "),
        )
        .unwrap();
    container.inject_all().unwrap();

    assert_eq!(logger.prefix(), "[svc] ");
}

#[test]
fn test_non_string_prefix_fails_configuration() {
    let mut container = ServiceContainer::new();
    container
        .register_with_settings(
            Arc::new(LogService::console()),
            "log",
            ServiceSettings::new().with("prefix", 7),
        )
        .unwrap();
    assert!(container.inject_all().is_err());
}
