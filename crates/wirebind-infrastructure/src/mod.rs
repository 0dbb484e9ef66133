//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the registration analysis.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML / environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`report`] | JSON and human-readable analysis reports |
//!
//! ### Input
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | Symbol model document loading |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod model;
pub mod report;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use report::{AnalysisReport, Reporter};
