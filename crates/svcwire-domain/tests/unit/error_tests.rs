//! Unit tests for domain error types

use svcwire_domain::Error;

#[test]
fn test_unsupported_service_error() {
    let error = Error::unsupported_service("MissingService");
    match &error {
        Error::UnsupportedService { name } => assert_eq!(name, "MissingService"),
        _ => panic!("Expected UnsupportedService error"),
    }
    assert!(error.to_string().contains("MissingService"));
}

#[test]
fn test_no_default_service_error() {
    let error = Error::no_default_service("timer");
    assert_eq!(error.to_string(), "No default service found for \"timer\"");
    assert_eq!(error.subject(), Some("timer"));
}

#[test]
fn test_duplicate_and_unknown_errors_name_the_role() {
    assert_eq!(Error::duplicate_role("cache").subject(), Some("cache"));
    assert_eq!(Error::unknown_service("price").subject(), Some("price"));
    assert!(Error::unknown_service("price").to_string().contains("price"));
}

#[test]
fn test_dependency_resolution_error() {
    let error = Error::dependency_resolution(3, ["a", "b"]);
    match &error {
        Error::DependencyResolution { passes, unresolved } => {
            assert_eq!(*passes, 3);
            assert_eq!(unresolved, &vec!["a".to_string(), "b".to_string()]);
        }
        _ => panic!("Expected DependencyResolution error"),
    }
    assert_eq!(error.subject(), None);
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error = Error::configuration_with_source("Failed to read", io);
    assert!(std::error::Error::source(&error).is_some());
    assert!(error.to_string().starts_with("Configuration error"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    assert!(matches!(error, Error::Json { .. }));
}
