//! Timer Service Tests

use std::time::Duration;

use svcwire_domain::Service;
use svcwire_providers::TimerService;

#[test]
fn test_named_timer_lifecycle() {
    let timer = TimerService::new();
    assert!(timer.elapsed("build").is_none());

    timer.start("build");
    assert!(timer.is_running("build"));

    timer.advance(Duration::from_secs(5));
    assert!(timer.elapsed("build").unwrap() >= Duration::from_secs(5));

    let total = timer.stop("build").unwrap();
    assert!(total >= Duration::from_secs(5));
    assert!(!timer.is_running("build"));
    assert!(timer.stop("build").is_none());
}

#[test]
fn test_clock_is_monotonic_and_advances() {
    let timer = TimerService::new();
    let first = timer.now();
    timer.advance(Duration::from_millis(250));
    let second = timer.now();
    assert!(second >= first + Duration::from_millis(250));
}

#[test]
fn test_restart_resets_timer() {
    let timer = TimerService::new();
    timer.start("job");
    timer.advance(Duration::from_secs(60));
    timer.start("job");
    assert!(timer.elapsed("job").unwrap() < Duration::from_secs(60));
}

#[test]
fn test_running_timers_are_sorted() {
    let timer = TimerService::new();
    timer.start("zeta");
    timer.start("alpha");
    assert_eq!(timer.running(), vec!["alpha".to_string(), "zeta".to_string()]);
}

#[test]
fn test_timer_has_no_dependencies() {
    let timer = TimerService::new();
    assert_eq!(timer.service_name(), "TimerService");
    assert!(timer.dependencies().is_empty());
}

#[test]
fn test_advance_saturates_instead_of_wrapping() {
    let timer = TimerService::new();
    timer.advance(Duration::from_nanos(u64::MAX));
    let before = timer.now();

    timer.advance(Duration::from_secs(1));
    assert!(timer.now() >= before);

    timer.advance(Duration::MAX);
    assert!(timer.now() >= before);
}
