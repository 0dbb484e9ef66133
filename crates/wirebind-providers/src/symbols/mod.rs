//! Symbol model providers
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`InMemorySymbolModel`] | Arena-backed model built from a [`ModelDocument`] |

/// Serialized model document format
pub mod document;
/// In-memory `SymbolModel` implementation
pub mod memory;

pub use document::{
    ArgumentDecl, ConstructorDecl, InvocationDecl, ModelDocument, ParameterDecl, PropertyDecl,
    TypeDecl,
};
pub use memory::InMemorySymbolModel;
