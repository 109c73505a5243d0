//! Tests for the default-implementation table

use svcwire_domain::registry::DefaultServiceEntry;
use svcwire_infrastructure::DefaultServices;

#[test]
fn test_lookup() {
    let defaults = DefaultServices::new().with("timer", "TimerService");
    assert_eq!(defaults.service_for("timer"), Some("TimerService"));
    assert_eq!(defaults.service_for("cache"), None);
}

#[test]
fn test_from_entries_keeps_first_binding() {
    let entries = [
        DefaultServiceEntry {
            role: "log",
            service: "ConsoleLogger",
        },
        DefaultServiceEntry {
            role: "log",
            service: "NullLogger",
        },
    ];
    let defaults = DefaultServices::from_entries(entries.iter());
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults.service_for("log"), Some("ConsoleLogger"));
}

#[test]
fn test_iter_in_role_order() {
    let defaults: DefaultServices = [("timer", "TimerService"), ("cache", "CacheService")]
        .into_iter()
        .collect();
    let roles: Vec<_> = defaults.iter().map(|(role, _)| role).collect();
    assert_eq!(roles, vec!["cache", "timer"]);
}
