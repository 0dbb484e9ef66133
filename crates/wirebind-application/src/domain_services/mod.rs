//! Domain Services
//!
//! The per-site analysis steps and the whole-set validator.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`classify`] | Plain / deferred / collection classification of a type |
//! | [`select_constructor`] | Injectable constructor selection |
//! | [`discover_properties`] | Marker-carrying property discovery |
//! | [`RegistrationExtractor`] | Invocation site to registration record |
//! | [`DependencyGraphValidator`] | Duplicate, cycle and lazy-target checks |

/// Type classification
pub mod classifier;
/// Constructor selection
pub mod constructor;
/// Registration extraction from invocation sites
pub mod extractor;
/// Whole-set graph validation
pub mod graph;
/// Well-known symbol resolution and matching
pub mod markers;
/// Property injection discovery
pub mod properties;

pub use classifier::classify;
pub use constructor::{SelectedConstructor, select_constructor};
pub use extractor::{CallShape, Extraction, RegistrationExtractor, contract_text, mode_text};
pub use graph::{DependencyGraphValidator, Validated};
pub use markers::{KnownSymbol, KnownSymbols, symbol_matches};
pub use properties::discover_properties;
