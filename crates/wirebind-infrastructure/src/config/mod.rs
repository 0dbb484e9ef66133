//! Configuration management
//!
//! Layered configuration for the analysis, the emitter, logging and reports.
//! Sources merge in order: defaults, a TOML file, then `WIREBIND_*`
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::{AppConfig, LoggingConfig, ReportConfig, ReportFormat};
