//! Analysis Service Use Case
//!
//! Runs the full registration analysis over one symbol model:
//! per-site extraction (optionally on the rayon pool), the collection
//! barrier, then whole-set graph validation.

use super::cache::{CacheStats, ExtractionCache};
use crate::domain_services::extractor::{Extraction, RegistrationExtractor};
use crate::domain_services::graph::DependencyGraphValidator;
use crate::domain_services::markers::KnownSymbols;
use crate::options::AnalysisOptions;
use rayon::prelude::*;
use std::sync::Arc;
use wirebind_domain::diagnostics::{Diagnostic, Severity};
use wirebind_domain::ports::SymbolModel;
use wirebind_domain::value_objects::{InvocationSite, RegistrationRecord};

/// Counters of one analysis pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisStats {
    /// Invocation sites handed in
    pub sites: usize,
    /// Records produced by extraction
    pub extracted: usize,
    /// Sites dropped silently as not being registration calls
    pub skipped: usize,
    /// Registrations dropped by extraction or validation
    pub rejected: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Result of [`AnalysisService::analyze`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisOutcome {
    /// Validated records, in invocation order
    pub records: Vec<RegistrationRecord>,
    /// Extraction diagnostics by site order, then validation diagnostics
    pub diagnostics: Vec<Diagnostic>,
    pub stats: AnalysisStats,
}

impl AnalysisOutcome {
    pub fn has_errors(&self) -> bool {
        self.stats.errors > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.stats.warnings > 0
    }
}

/// Analysis service bound to one symbol model
pub struct AnalysisService {
    model: Arc<dyn SymbolModel>,
    options: AnalysisOptions,
    cache: ExtractionCache,
}

impl AnalysisService {
    /// Create a service; the extraction cache starts empty
    pub fn new(model: Arc<dyn SymbolModel>, options: AnalysisOptions) -> Self {
        Self {
            model,
            options,
            cache: ExtractionCache::new(),
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Analyze every invocation site and validate the collected registrations
    #[tracing::instrument(skip_all, fields(sites = sites.len()))]
    pub fn analyze(&self, sites: &[InvocationSite]) -> AnalysisOutcome {
        let known = KnownSymbols::resolve(self.model.as_ref(), &self.options.well_known);
        tracing::debug!(
            lazy_resolved = known.lazy.is_resolved(),
            enumerable_resolved = known.enumerable.is_resolved(),
            "well-known symbols resolved"
        );

        let extractor = RegistrationExtractor::new(
            self.model.as_ref(),
            &known,
            &self.options.registrations_type,
        );

        let extractions: Vec<Extraction> = if self.options.parallel {
            sites
                .par_iter()
                .map(|site| self.extract_cached(&extractor, site))
                .collect()
        } else {
            sites
                .iter()
                .map(|site| self.extract_cached(&extractor, site))
                .collect()
        };

        let mut stats = AnalysisStats {
            sites: sites.len(),
            ..AnalysisStats::default()
        };
        let mut diagnostics = Vec::new();
        let mut collected = Vec::new();
        for extraction in extractions {
            match extraction {
                Ok(Some(record)) => collected.push(record),
                Ok(None) => stats.skipped += 1,
                Err(rejection) => {
                    stats.rejected += 1;
                    diagnostics.extend(rejection.diagnostics);
                }
            }
        }
        stats.extracted = collected.len();

        let validated =
            DependencyGraphValidator::new(self.options.cycle_detection).validate(&collected);
        stats.rejected += collected.len() - validated.records.len();
        diagnostics.extend(validated.diagnostics);

        for diagnostic in &diagnostics {
            match diagnostic.severity() {
                Severity::Error => stats.errors += 1,
                Severity::Warning => stats.warnings += 1,
            }
        }

        tracing::info!(
            sites = stats.sites,
            registrations = validated.records.len(),
            rejected = stats.rejected,
            errors = stats.errors,
            warnings = stats.warnings,
            "analysis complete"
        );

        AnalysisOutcome {
            records: validated.records,
            diagnostics,
            stats,
        }
    }

    fn extract_cached(
        &self,
        extractor: &RegistrationExtractor<'_>,
        site: &InvocationSite,
    ) -> Extraction {
        if let Some(cached) = self.cache.get(site) {
            tracing::trace!(location = %site.location, "extraction cache hit");
            return Ok(cached);
        }

        let extraction = extractor.extract(site);
        match &extraction {
            Ok(extracted) => {
                tracing::debug!(
                    location = %site.location,
                    registered = extracted.is_some(),
                    "site extracted"
                );
                self.cache.insert(site.clone(), extracted.clone());
            }
            Err(rejection) => {
                tracing::debug!(
                    location = %site.location,
                    diagnostics = rejection.diagnostics.len(),
                    "registration rejected"
                );
            }
        }
        extraction
    }
}
