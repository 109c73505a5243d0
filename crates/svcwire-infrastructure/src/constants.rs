//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "svcwire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "svcwire";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SVCWIRE";

/// Separator for nested keys in environment variables (`SVCWIRE_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "SVCWIRE_LOG";

/// File stem used for rotated log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "svcwire";
