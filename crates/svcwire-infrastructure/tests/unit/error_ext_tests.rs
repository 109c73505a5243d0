//! Tests for error context helpers

use svcwire_domain::Error;
use svcwire_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing file"))
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("Failed to read config").unwrap_err();
    match err {
        Error::Configuration { message, source } => {
            assert!(message.starts_with("Failed to read config"));
            assert!(message.contains("missing file"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_with_config_context_is_lazy() {
    let mut called = false;
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);
    let value = ok
        .with_config_context(|| {
            called = true;
            "unused"
        })
        .unwrap();

    assert_eq!(value, 1);
    assert!(!called);
}
