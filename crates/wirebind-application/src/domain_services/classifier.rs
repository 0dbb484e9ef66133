//! Type Classifier
//!
//! Decides whether a parameter or property type is resolved as itself, as a
//! lazily constructed wrapper, or as the collection of all implementations.

use super::markers::KnownSymbols;
use wirebind_domain::ports::SymbolModel;
use wirebind_domain::value_objects::{DependencyKind, TypeRef};

/// Classify `ty`; total, never fails
///
/// Only single-argument instantiations of the well-known wrapper and sequence
/// definitions are special. Anything else, including a similarly named type
/// with zero or several type arguments, is `Plain`.
pub fn classify(model: &dyn SymbolModel, known: &KnownSymbols, ty: &TypeRef) -> DependencyKind {
    let arguments = model.generic_arguments(ty);
    if let [argument] = arguments.as_slice() {
        let definition = model.original_definition(ty);
        if known.lazy.matches(&definition) {
            return DependencyKind::Deferred(argument.clone());
        }
        if known.enumerable.matches(&definition) {
            return DependencyKind::CollectionOf(argument.clone());
        }
    }
    DependencyKind::Plain(ty.clone())
}
