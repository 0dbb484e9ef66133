//! Constructor Selector
//!
//! Picks the one constructor used to build a concrete type:
//! - a single candidate is always selected, marker or not
//! - several candidates require exactly one carrying the constructor marker
//! - the selected constructor must be at least internal

use super::classifier::classify;
use super::markers::KnownSymbols;
use wirebind_domain::diagnostics::{Diagnostic, Rejection};
use wirebind_domain::ports::SymbolModel;
use wirebind_domain::value_objects::{ConstructorCandidate, Dependency, Location, TypeRef};

/// The selected constructor and its classified parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedConstructor {
    pub constructor: ConstructorCandidate,
    pub dependencies: Vec<Dependency>,
}

/// Select the injectable constructor of `concrete`
///
/// `site` is the invocation location, used where no better location exists.
pub fn select_constructor(
    model: &dyn SymbolModel,
    known: &KnownSymbols,
    concrete: &TypeRef,
    site: &Location,
) -> Result<SelectedConstructor, Rejection> {
    let mut candidates: Vec<ConstructorCandidate> = model
        .constructors(concrete)
        .into_iter()
        .filter(|c| !c.is_static && !c.is_synthesized)
        .collect();

    let selected = match candidates.len() {
        0 => return Err(no_valid_constructor(concrete, site).into()),
        1 => candidates.swap_remove(0),
        _ => select_marked(model, known, concrete, candidates, site)?,
    };

    if !model.accessibility(&selected.member).is_at_least_internal() {
        return Err(Diagnostic::ConstructorsMustBePublic {
            type_name: concrete.name().to_string(),
            location: selected.location.clone().unwrap_or_else(|| site.clone()),
        }
        .into());
    }

    let dependencies = selected
        .parameters
        .iter()
        .map(|p| Dependency::new(&p.name, classify(model, known, &p.ty), p.location.clone()))
        .collect();

    Ok(SelectedConstructor {
        constructor: selected,
        dependencies,
    })
}

fn select_marked(
    model: &dyn SymbolModel,
    known: &KnownSymbols,
    concrete: &TypeRef,
    candidates: Vec<ConstructorCandidate>,
    site: &Location,
) -> Result<ConstructorCandidate, Rejection> {
    let mut marked: Vec<ConstructorCandidate> = candidates
        .into_iter()
        .filter(|c| KnownSymbols::has_marker(model, &c.member, &known.constructor_marker))
        .collect();

    match marked.len() {
        0 => Err(no_valid_constructor(concrete, site).into()),
        1 => Ok(marked.swap_remove(0)),
        // One diagnostic per extra marked constructor
        _ => Err(Rejection::new(
            marked
                .iter()
                .skip(1)
                .map(|c| Diagnostic::MultipleConstructorsMarked {
                    type_name: concrete.name().to_string(),
                    location: c.location.clone().unwrap_or_else(|| site.clone()),
                })
                .collect(),
        )),
    }
}

fn no_valid_constructor(concrete: &TypeRef, site: &Location) -> Diagnostic {
    Diagnostic::NoValidConstructor {
        type_name: concrete.name().to_string(),
        location: site.clone(),
    }
}
