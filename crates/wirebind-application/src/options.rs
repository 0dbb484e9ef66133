//! Analysis options
//!
//! Deserializable so the infrastructure configuration can embed them as the
//! `[analysis]` section.

use serde::{Deserialize, Serialize};
use wirebind_domain::constants::{
    CONSTRUCTOR_MARKER_METADATA_NAME, DEFAULT_REGISTRATIONS_TYPE, ENUMERABLE_METADATA_NAME,
    LAZY_METADATA_NAME, PROPERTY_MARKER_METADATA_NAME,
};

/// How far the validator follows constructor dependencies looking for cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleDetection {
    /// Only direct A <-> B cycles
    Pairwise,
    /// Cycles of any length, found by depth-first search
    #[default]
    Full,
}

/// Metadata names of the well-known types and marker attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellKnownNames {
    pub lazy: String,
    pub enumerable: String,
    pub constructor_marker: String,
    pub property_marker: String,
}

impl Default for WellKnownNames {
    fn default() -> Self {
        Self {
            lazy: LAZY_METADATA_NAME.to_string(),
            enumerable: ENUMERABLE_METADATA_NAME.to_string(),
            constructor_marker: CONSTRUCTOR_MARKER_METADATA_NAME.to_string(),
            property_marker: PROPERTY_MARKER_METADATA_NAME.to_string(),
        }
    }
}

/// Options for one analysis pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub cycle_detection: CycleDetection,
    /// Extract invocation sites on the rayon thread pool
    pub parallel: bool,
    /// Type that must declare the invoked registration method
    pub registrations_type: String,
    pub well_known: WellKnownNames,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            cycle_detection: CycleDetection::default(),
            parallel: true,
            registrations_type: DEFAULT_REGISTRATIONS_TYPE.to_string(),
            well_known: WellKnownNames::default(),
        }
    }
}
