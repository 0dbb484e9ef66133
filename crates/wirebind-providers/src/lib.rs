//! # wirebind - Provider Implementations
//!
//! Adapters for the ports defined in `wirebind-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Symbols | `SymbolModel` | InMemory (model document) |
//! | Emission | `RegistrationEmitter` | Template (handlebars) |
//!
//! ## Usage
//!
//! ```ignore
//! use wirebind_providers::symbols::ModelDocument;
//! use wirebind_providers::emit::{EmitOptions, TemplateEmitter};
//!
//! let (model, sites) = ModelDocument::from_yaml_str(text)?.into_parts()?;
//! let emitter = TemplateEmitter::new(EmitOptions::default())?;
//! ```

// Re-export wirebind-domain types commonly used with providers
pub use wirebind_domain::error::{Error, Result};
pub use wirebind_domain::ports::{RegistrationEmitter, SymbolModel};

/// Provider-specific constants
pub mod constants;

/// Symbol model implementations
///
/// Implements `SymbolModel` over a serialized model document.
pub mod symbols;

/// Code emitter implementations
///
/// Implements `RegistrationEmitter` with handlebars templates.
pub mod emit;

pub use emit::{EmitOptions, TemplateEmitter};
pub use symbols::{InMemorySymbolModel, ModelDocument};
