//! Event Service Tests

use std::sync::Arc;

use serde_json::json;
use svcwire_domain::{Error, Service, ServiceSettings};
use svcwire_infrastructure::ServiceContainer;
use svcwire_providers::{EventService, LogService};

fn wired_events(settings: ServiceSettings, logger: Arc<LogService>) -> Arc<EventService> {
    let events = Arc::new(EventService::new());
    let mut container = ServiceContainer::new();
    container
        .register_with_settings(events.clone(), "event", settings)
        .unwrap();
    container.register(logger, "log").unwrap();
    container.inject_all().unwrap();
    events
}

#[test]
fn test_event_service_depends_on_log() {
    assert_eq!(EventService::new().dependencies(), vec!["log".to_string()]);
    assert!(EventService::null().dependencies().is_empty());
    assert_eq!(EventService::null().service_name(), "NullEventService");
}

#[tokio::test]
async fn test_subscribers_receive_emitted_events() {
    let events = wired_events(ServiceSettings::new(), Arc::new(LogService::null()));
    let mut first = events.subscribe();
    let mut second = events.subscribe();

    let delivered = events.emit("cache.cleared", json!({ "entries": 3 }));
    assert_eq!(delivered, 2);

    let event = first.recv().await.unwrap();
    assert_eq!(event.kind, "cache.cleared");
    assert_eq!(event.payload["entries"], 3);
    assert_eq!(second.recv().await.unwrap(), event);
}

#[test]
fn test_emit_without_subscribers() {
    let events = EventService::new();
    assert_eq!(events.subscriber_count(), 0);
    assert_eq!(events.emit("nobody.listens", json!(null)), 0);
}

#[test]
fn test_emissions_are_logged_through_bound_logger() {
    let logger = Arc::new(LogService::console());
    let events = wired_events(ServiceSettings::new(), logger.clone());

    let _rx = events.subscribe();
    events.emit("one", json!(1));
    events.emit("two", json!(2));

    assert!(Arc::ptr_eq(&events.logger().unwrap(), &logger));
    assert_eq!(logger.emitted(), 2);
}

#[test]
fn test_capacity_setting() {
    let events = wired_events(
        ServiceSettings::new().with("capacity", 16),
        Arc::new(LogService::null()),
    );
    assert_eq!(events.capacity(), 16);
}

#[test]
fn test_zero_capacity_is_rejected() {
    let mut container = ServiceContainer::new();
    container
        .register_with_settings(
            Arc::new(EventService::new()),
            "event",
            ServiceSettings::new().with("capacity", 0),
        )
        .unwrap();
    container
        .register(Arc::new(LogService::null()), "log")
        .unwrap();

    let err = container.inject_all().unwrap_err();
    assert!(matches!(err, Error::Service { role, .. } if role == "event"));
}

#[tokio::test]
async fn test_null_event_service_discards() {
    let events = EventService::null();
    let mut rx = events.subscribe();
    assert_eq!(events.emit("dropped", json!({})), 0);
    assert!(rx.try_recv().is_err());
}
