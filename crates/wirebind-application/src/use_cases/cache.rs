//! Extraction memo cache
//!
//! Extraction is a pure function of the invocation site and the symbol model,
//! so one cache belongs to exactly one model. Rejections are not cached: they
//! carry diagnostics that must be reported on every pass.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use wirebind_domain::value_objects::{InvocationSite, RegistrationRecord};

/// Hit/miss counters of an [`ExtractionCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Concurrent site -> successful extraction map
#[derive(Debug, Default)]
pub struct ExtractionCache {
    entries: DashMap<InvocationSite, Option<RegistrationRecord>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ExtractionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached extraction of `site`; the outer `None` is a miss
    pub fn get(&self, site: &InvocationSite) -> Option<Option<RegistrationRecord>> {
        match self.entries.get(site) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value().clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, site: InvocationSite, extracted: Option<RegistrationRecord>) {
        self.entries.insert(site, extracted);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
