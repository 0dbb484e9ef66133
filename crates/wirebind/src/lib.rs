//! # wirebind
//!
//! Compile-time analysis and code generation for service registrations.
//!
//! wirebind reads a symbol model of a compilation, finds the calls that
//! register services with the runtime registry, validates constructor
//! selection, property injection and the dependency graph, and emits the
//! construction code for every valid registration.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wirebind::application::{AnalysisOptions, AnalysisService};
//! use wirebind::infrastructure::model::load_model;
//!
//! let loaded = load_model(Path::new("model.yaml"))?;
//! let service = AnalysisService::new(Arc::new(loaded.model), AnalysisOptions::default());
//! let outcome = service.analyze(&loaded.sites);
//! for diagnostic in &outcome.diagnostics {
//!     eprintln!("{}: {}", diagnostic.id(), diagnostic);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, diagnostics, ports and errors
//! - `application` - Analysis passes and the analysis service
//! - `providers` - In-memory symbol model and the template emitter
//! - `infrastructure` - Configuration, logging, model loading and reports

/// Domain layer - value objects, diagnostics and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebind_domain::*;
}

/// Application layer - analysis passes and services
pub mod application {
    pub use wirebind_application::*;
}

/// Provider implementations - symbol models and emitters
pub mod providers {
    pub use wirebind_providers::*;
}

/// Infrastructure layer - configuration, logging and reports
pub mod infrastructure {
    pub use wirebind_infrastructure::*;
}

pub mod cli;

// Re-export commonly used types at the crate root
pub use application::{AnalysisOptions, AnalysisOutcome, AnalysisService};
pub use cli::{Cli, Command, run};
pub use domain::diagnostics::{Diagnostic, Severity};
pub use domain::error::{Error, Result};
