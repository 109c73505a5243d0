//! Tests for the service catalog

use svcwire_domain::registry::ServiceEntry;
use svcwire_domain::{Error, construct_default};
use svcwire_infrastructure::ServiceCatalog;

use crate::test_utils::{FakeTimer, test_catalog};

#[test]
fn test_supports_registered_names_only() {
    let catalog = test_catalog();
    assert!(catalog.supports("TimerService"));
    assert!(!catalog.supports("timer"));
    assert!(!catalog.supports("Web3Service"));
}

#[test]
fn test_construct_returns_fresh_instances() {
    let catalog = test_catalog();
    let first = catalog.construct("TimerService").unwrap();
    let second = catalog.construct("TimerService").unwrap();

    assert_eq!(first.service_name(), "TimerService");
    assert!(!std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn test_construct_unknown_name_fails() {
    let err = test_catalog().construct("MissingService").unwrap_err();
    assert!(matches!(err, Error::UnsupportedService { name } if name == "MissingService"));
}

#[test]
fn test_from_entries_keeps_first_duplicate() {
    let entries = [
        ServiceEntry {
            name: "TimerService",
            description: "first",
            factory: construct_default::<FakeTimer>,
        },
        ServiceEntry {
            name: "TimerService",
            description: "second",
            factory: construct_default::<FakeTimer>,
        },
    ];
    let catalog = ServiceCatalog::from_entries(entries.iter());

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.describe("TimerService"), Some("first"));
}

#[test]
fn test_names_are_sorted() {
    let catalog = ServiceCatalog::new()
        .with_service::<FakeTimer, _>("b")
        .with_service::<FakeTimer, _>("a");
    assert_eq!(catalog.names(), vec!["a", "b"]);
}

#[test]
fn test_display_lists_services() {
    let mut catalog = ServiceCatalog::new();
    catalog.insert("TimerService", "Named timers", construct_default::<FakeTimer>);

    let display = format!("{catalog}");
    assert!(display.contains("Available Services"));
    assert!(display.contains("TimerService: Named timers"));
}

#[test]
fn test_empty_catalog() {
    let catalog = ServiceCatalog::new();
    assert!(catalog.is_empty());
    assert!(catalog.construct("anything").is_err());
}
