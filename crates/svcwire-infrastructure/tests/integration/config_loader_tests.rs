//! Configuration Loader Tests

use figment::Jail;
use svcwire_domain::{Error, ServiceConfigValue};
use svcwire_infrastructure::config::{AppConfig, ConfigLoader, validate_app_config};
use svcwire_infrastructure::constants::DEFAULT_LOG_LEVEL;
use svcwire_infrastructure::{RegistrationPolicy, ServiceConfig};
use tempfile::TempDir;

const SAMPLE: &str = r#"
[logging]
level = "debug"

[container]
registration = "override"
max_resolution_passes = 4

[services]
timer = true
log = false
cache = ["CacheService", { ttl_secs = 30 }]
event = "EventService"
"#;

#[test]
fn test_config_loader_defaults_for_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .with_env_prefix("SVCWIRE_TEST_ABSENT")
        .load()
        .unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(config.services.is_empty());
    assert_eq!(config.container.registration, RegistrationPolicy::Reject);
}

#[test]
fn test_config_loader_reads_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("svcwire.toml");
    std::fs::write(&path, SAMPLE).unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SVCWIRE_TEST_TOML")
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.container.registration, RegistrationPolicy::Override);
    assert_eq!(config.container.max_resolution_passes, Some(4));
    assert_eq!(config.services["timer"], ServiceConfigValue::Enabled(true));
    assert_eq!(
        config.services["event"],
        ServiceConfigValue::Name("EventService".into())
    );

    let services = ServiceConfig::from_values(&config.services).unwrap();
    assert_eq!(services.roles().collect::<Vec<_>>(), vec!["cache", "event", "timer"]);
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("svcwire.toml", SAMPLE)?;
        jail.set_env("SVCWIRE_LOGGING__LEVEL", "warn");
        jail.set_env("SVCWIRE_SERVICES__LOG", "NullLogger");

        let config = ConfigLoader::new()
            .with_config_path("svcwire.toml")
            .load()
            .expect("config loads");

        assert_eq!(config.logging.level, "warn");
        assert_eq!(
            config.services["log"],
            ServiceConfigValue::Name("NullLogger".into())
        );
        Ok(())
    });
}

#[test]
fn test_invalid_entries_are_rejected_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    std::fs::write(&path, "[services]\ncache = [\"CacheService\", 5]\n").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SVCWIRE_TEST_BAD")
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfigEntry { role, .. } if role == "cache"));
}

#[test]
fn test_validation_rejects_zero_pass_cap_and_bad_level() {
    let mut config = AppConfig::default();
    config.container.max_resolution_passes = Some(0);
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.logging.level = "chatty".into();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.logging.level = "trace".into();
    original
        .services
        .insert("cache".into(), ServiceConfigValue::Name("CacheService".into()));

    let loader = ConfigLoader::new().with_env_prefix("SVCWIRE_TEST_SAVE");
    loader.save_to_file(&original, &path).unwrap();

    let loaded = loader.clone().with_config_path(&path).load().unwrap();
    assert_eq!(loaded.logging.level, "trace");
    assert_eq!(loaded.services, original.services);
}
