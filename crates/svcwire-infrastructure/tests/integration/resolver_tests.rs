//! Tests for dependency closure

use std::sync::Arc;

use svcwire_domain::{Error, Service};
use svcwire_infrastructure::di::missing_dependencies;
use svcwire_infrastructure::{DefaultServices, DependencyResolver, ServiceCatalog, ServiceContainer};

use crate::test_utils::{
    ChainA, Dangling, FakeCache, FakeTimer, Fanout, LoopA, Orphan, test_catalog, test_defaults,
};

fn container_with(role: &str, service: Arc<dyn Service>) -> ServiceContainer {
    let mut container = ServiceContainer::new();
    container.register(service, role).unwrap();
    container
}

#[test]
fn test_missing_dependencies_deduplicates_and_sorts() {
    let container = container_with("fan", Arc::new(Fanout::default()));
    let missing: Vec<_> = missing_dependencies(&container).into_iter().collect();
    assert_eq!(missing, vec!["c", "timer"]);
}

#[test]
fn test_single_pass_resolution() {
    let (catalog, defaults) = (test_catalog(), test_defaults());
    let mut container = container_with("cache", Arc::new(FakeCache::default()));

    let report = DependencyResolver::new(&catalog, &defaults)
        .close(&mut container)
        .unwrap();

    assert_eq!(report.passes, 1);
    assert_eq!(report.registered, vec!["timer"]);
    assert_eq!(container.lookup("timer").unwrap().service_name(), "TimerService");
}

#[test]
fn test_transitive_chain_needs_one_pass_per_level() {
    let (catalog, defaults) = (test_catalog(), test_defaults());
    let mut container = container_with("a", Arc::new(ChainA::default()));

    let report = DependencyResolver::new(&catalog, &defaults)
        .close(&mut container)
        .unwrap();

    assert_eq!(report.passes, 2);
    assert_eq!(report.registered, vec!["b", "c"]);
    assert!(missing_dependencies(&container).is_empty());
}

#[test]
fn test_already_registered_dependency_is_not_replaced() {
    let (catalog, defaults) = (test_catalog(), test_defaults());
    let timer: Arc<dyn Service> = Arc::new(FakeTimer::default());
    let mut container = container_with("timer", timer.clone());
    container.register(Arc::new(FakeCache::default()), "cache").unwrap();

    let report = DependencyResolver::new(&catalog, &defaults)
        .close(&mut container)
        .unwrap();

    assert_eq!(report.passes, 0);
    assert!(report.registered.is_empty());
    assert!(Arc::ptr_eq(&container.lookup("timer").unwrap(), &timer));
}

#[test]
fn test_cycles_settle() {
    let (catalog, defaults) = (test_catalog(), test_defaults());
    let mut container = container_with("loop_a", Arc::new(LoopA::default()));

    let report = DependencyResolver::new(&catalog, &defaults)
        .close(&mut container)
        .unwrap();

    assert_eq!(report.registered, vec!["loop_b"]);
    assert_eq!(container.len(), 2);
}

#[test]
fn test_missing_default_fails() {
    let (catalog, defaults) = (test_catalog(), test_defaults());
    let mut container = container_with("orphan", Arc::new(Orphan::default()));

    let err = DependencyResolver::new(&catalog, &defaults)
        .close(&mut container)
        .unwrap_err();

    assert!(matches!(err, Error::NoDefaultService { name } if name == "ghost"));
}

#[test]
fn test_default_outside_catalog_fails() {
    let (catalog, defaults) = (test_catalog(), test_defaults());
    let mut container = container_with("dangler", Arc::new(Dangling::default()));

    let err = DependencyResolver::new(&catalog, &defaults)
        .close(&mut container)
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedService { name } if name == "NotInCatalog"));
    assert!(!container.contains("dangling"));
}

#[test]
fn test_failed_pass_registers_nothing_from_that_pass() {
    let (catalog, defaults) = (test_catalog(), test_defaults());
    let mut container = container_with("orphan", Arc::new(Orphan::default()));
    container.register(Arc::new(FakeCache::default()), "cache").unwrap();

    assert!(
        DependencyResolver::new(&catalog, &defaults)
            .close(&mut container)
            .is_err()
    );
    assert!(!container.contains("timer"));
}

#[test]
fn test_pass_cap_reports_resolution_error() {
    let (catalog, defaults) = (test_catalog(), test_defaults());
    let mut container = container_with("a", Arc::new(ChainA::default()));

    let err = DependencyResolver::new(&catalog, &defaults)
        .with_max_passes(1)
        .close(&mut container)
        .unwrap_err();

    match err {
        Error::DependencyResolution { passes, unresolved } => {
            assert_eq!(passes, 1);
            assert_eq!(unresolved, vec!["c".to_string()]);
        }
        other => panic!("Expected DependencyResolution, got {other:?}"),
    }
}

#[test]
fn test_default_pass_cap_tracks_table_size() {
    let catalog = ServiceCatalog::new();
    let defaults = DefaultServices::new().with("a", "A").with("b", "B");
    assert_eq!(DependencyResolver::new(&catalog, &defaults).max_passes(), 3);
}

#[test]
fn test_empty_table_reports_missing_default_not_cap() {
    let catalog = test_catalog();
    let defaults = DefaultServices::new();
    let mut container = container_with("cache", Arc::new(FakeCache::default()));

    let err = DependencyResolver::new(&catalog, &defaults)
        .close(&mut container)
        .unwrap_err();
    assert!(matches!(err, Error::NoDefaultService { .. }));
}
