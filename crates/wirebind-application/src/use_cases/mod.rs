//! Use Cases
//!
//! Application services orchestrating the domain services.

/// Whole-pipeline analysis service
pub mod analysis_service;
/// Extraction memoization
pub mod cache;

pub use analysis_service::{AnalysisOutcome, AnalysisService, AnalysisStats};
pub use cache::{CacheStats, ExtractionCache};
