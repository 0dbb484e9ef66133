//! Property Injection Discoverer
//!
//! Collects marker-carrying properties across the inheritance chain,
//! most-derived type first. Shadowed properties are kept at every level.

use super::classifier::classify;
use super::markers::KnownSymbols;
use wirebind_domain::diagnostics::{Diagnostic, Rejection};
use wirebind_domain::ports::SymbolModel;
use wirebind_domain::value_objects::{Dependency, Location, PropertyCandidate, TypeRef};

/// Discover the injected properties of `concrete`
///
/// A single marked property without an internal or public setter rejects the
/// whole registration.
pub fn discover_properties(
    model: &dyn SymbolModel,
    known: &KnownSymbols,
    concrete: &TypeRef,
    site: &Location,
) -> Result<Vec<Dependency>, Rejection> {
    let mut dependencies = Vec::new();

    for level in model.base_types_and_self(concrete) {
        for property in model.properties(&level) {
            if !KnownSymbols::has_marker(model, &property.member(), &known.property_marker) {
                continue;
            }
            ensure_settable(model, &property, site)?;
            dependencies.push(Dependency::new(
                &property.name,
                classify(model, known, &property.ty),
                property.location.clone(),
            ));
        }
    }

    Ok(dependencies)
}

fn ensure_settable(
    model: &dyn SymbolModel,
    property: &PropertyCandidate,
    site: &Location,
) -> Result<(), Rejection> {
    let settable =
        property.has_setter && model.accessibility(&property.setter()).is_at_least_internal();
    if settable {
        return Ok(());
    }

    let location = property
        .setter_location
        .clone()
        .or_else(|| property.location.clone())
        .unwrap_or_else(|| site.clone());
    Err(Diagnostic::PropertyMustBeSettable {
        property: property.qualified_name(),
        location,
    }
    .into())
}
