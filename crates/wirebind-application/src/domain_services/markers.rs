//! Well-known symbol matching
//!
//! A well-known type or marker attribute is compared by resolved-symbol
//! identity when the compilation references its defining library, and by
//! exact qualified name otherwise. The name fallback keeps the analyzer
//! usable without a hard reference on the wrapper/sequence libraries.

use crate::options::WellKnownNames;
use wirebind_domain::ports::SymbolModel;
use wirebind_domain::value_objects::{MemberRef, TypeRef};

/// Two-tier equality: identity with `resolved`, else name with `canonical`
pub fn symbol_matches(candidate: &TypeRef, resolved: Option<&TypeRef>, canonical: &str) -> bool {
    match resolved {
        Some(symbol) => symbol.is_same_symbol(candidate),
        None => candidate.name() == canonical,
    }
}

/// A well-known symbol, resolved once per compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownSymbol {
    canonical: String,
    resolved: Option<TypeRef>,
}

impl KnownSymbol {
    pub fn resolve(model: &dyn SymbolModel, canonical: &str) -> Self {
        Self {
            canonical: canonical.to_string(),
            resolved: model.resolve_well_known(canonical),
        }
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    pub fn matches(&self, candidate: &TypeRef) -> bool {
        symbol_matches(candidate, self.resolved.as_ref(), &self.canonical)
    }
}

/// Every well-known symbol the analysis looks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownSymbols {
    pub lazy: KnownSymbol,
    pub enumerable: KnownSymbol,
    pub constructor_marker: KnownSymbol,
    pub property_marker: KnownSymbol,
}

impl KnownSymbols {
    pub fn resolve(model: &dyn SymbolModel, names: &WellKnownNames) -> Self {
        Self {
            lazy: KnownSymbol::resolve(model, &names.lazy),
            enumerable: KnownSymbol::resolve(model, &names.enumerable),
            constructor_marker: KnownSymbol::resolve(model, &names.constructor_marker),
            property_marker: KnownSymbol::resolve(model, &names.property_marker),
        }
    }

    /// Whether `member` carries the `marker` attribute
    pub fn has_marker(model: &dyn SymbolModel, member: &MemberRef, marker: &KnownSymbol) -> bool {
        model
            .attributes(member)
            .iter()
            .any(|attribute| marker.matches(&attribute.class))
    }
}
