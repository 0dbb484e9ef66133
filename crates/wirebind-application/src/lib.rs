//! Application Layer - wirebind
//!
//! Registration analysis for the compile-time dependency injection generator.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the per-site analysis (classification, constructor selection,
//!   property discovery, registration extraction)
//! - Validates the collected registrations as a graph
//! - Orchestrates both in [`use_cases::AnalysisService`]
//! - Reaches the compiler only through the `SymbolModel` port
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `wirebind-domain`: value objects, diagnostics and ports
//! - `rayon` / `dashmap` for parallel extraction and memoization

pub mod domain_services;
pub mod options;
pub mod use_cases;

pub use domain_services::*;
pub use options::{AnalysisOptions, CycleDetection, WellKnownNames};
pub use use_cases::*;
