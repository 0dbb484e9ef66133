//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Analysis constants are defined in `wirebind_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wirebind.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wirebind";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WIREBIND";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "WIREBIND_LOG";

/// File stem of rolled log files when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "wirebind";

// ============================================================================
// MODEL DOCUMENT CONSTANTS
// ============================================================================

/// Extension of JSON model documents
pub const JSON_MODEL_EXTENSION: &str = "json";

/// Extensions of YAML model documents
pub const YAML_MODEL_EXTENSIONS: &[&str] = &["yaml", "yml"];

// ============================================================================
// REPORT CONSTANTS
// ============================================================================

/// Title line of human-readable reports
pub const REPORT_TITLE: &str = "=== Registration Analysis Report ===";
