//! Registration Extractor
//!
//! Turns one invocation site into a [`RegistrationRecord`].
//!
//! Three outcomes:
//! - `Ok(Some(record))` - a valid registration
//! - `Ok(None)` - the call does not have a recognized shape; dropped silently
//! - `Err(rejection)` - a recognized registration that cannot be wired

use super::constructor::select_constructor;
use super::markers::KnownSymbols;
use super::properties::discover_properties;
use wirebind_domain::constants::{
    CONTRACT_PARAMETER, MAX_ORDINARY_ARGUMENTS, MODE_PARAMETER, REGISTER_CONSTANT_METHOD,
    REGISTER_LAZY_SINGLETON_METHOD, REGISTER_METHOD,
};
use wirebind_domain::diagnostics::Rejection;
use wirebind_domain::ports::SymbolModel;
use wirebind_domain::value_objects::{
    Expression, ExpressionBinding, InvocationSite, RegistrationKind, RegistrationRecord, TypeRef,
};

/// Registration methods the extractor recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallShape {
    Register,
    RegisterLazySingleton,
    RegisterConstant,
}

impl CallShape {
    pub fn from_method_name(name: &str) -> Option<Self> {
        match name {
            REGISTER_METHOD => Some(Self::Register),
            REGISTER_LAZY_SINGLETON_METHOD => Some(Self::RegisterLazySingleton),
            REGISTER_CONSTANT_METHOD => Some(Self::RegisterConstant),
            _ => None,
        }
    }
}

/// Extraction result of one invocation site
pub type Extraction = Result<Option<RegistrationRecord>, Rejection>;

/// Extracts registration records against one symbol model
pub struct RegistrationExtractor<'a> {
    model: &'a dyn SymbolModel,
    known: &'a KnownSymbols,
    registrations_type: &'a str,
}

impl<'a> RegistrationExtractor<'a> {
    pub fn new(
        model: &'a dyn SymbolModel,
        known: &'a KnownSymbols,
        registrations_type: &'a str,
    ) -> Self {
        Self {
            model,
            known,
            registrations_type,
        }
    }

    /// Extract the registration described by `site`
    pub fn extract(&self, site: &InvocationSite) -> Extraction {
        let Some(shape) = self.recognize(site) else {
            tracing::trace!(location = %site.location, method = %site.method_name, "not a registration call");
            return Ok(None);
        };
        let Some((interface, concrete)) = registered_types(&site.type_arguments) else {
            tracing::trace!(location = %site.location, "unsupported type argument count");
            return Ok(None);
        };

        let contract = site.argument_for(CONTRACT_PARAMETER).and_then(contract_text);

        if shape == CallShape::RegisterConstant {
            return Ok(Some(RegistrationRecord {
                interface: interface.clone(),
                concrete: concrete.clone(),
                constructor_dependencies: Vec::new(),
                property_dependencies: Vec::new(),
                contract,
                kind: RegistrationKind::Constant,
                location: site.location.clone(),
            }));
        }

        let constructor = select_constructor(self.model, self.known, concrete, &site.location)?;
        let properties = discover_properties(self.model, self.known, concrete, &site.location)?;

        let kind = match shape {
            CallShape::RegisterLazySingleton => RegistrationKind::LazySingleton {
                mode: site.argument_for(MODE_PARAMETER).and_then(mode_text),
            },
            _ => RegistrationKind::Transient,
        };

        Ok(Some(RegistrationRecord {
            interface: interface.clone(),
            concrete: concrete.clone(),
            constructor_dependencies: constructor.dependencies,
            property_dependencies: properties,
            contract,
            kind,
            location: site.location.clone(),
        }))
    }

    /// Semantic confirmation of the syntactic match
    fn recognize(&self, site: &InvocationSite) -> Option<CallShape> {
        let shape = CallShape::from_method_name(&site.method_name)?;
        let binding = site.binding.as_ref()?;
        if binding.containing_type != self.registrations_type || binding.is_extension {
            return None;
        }
        if site.arguments.len() > MAX_ORDINARY_ARGUMENTS {
            return None;
        }
        Some(shape)
    }
}

/// `(interface, concrete)` from one or two type arguments
fn registered_types(type_arguments: &[TypeRef]) -> Option<(&TypeRef, &TypeRef)> {
    match type_arguments {
        [single] => Some((single, single)),
        [interface, concrete] => Some((interface, concrete)),
        _ => None,
    }
}

/// Contract key as it must appear in emitted code
///
/// Symbol display strings are not always valid expressions, so anything other
/// than a field/property reference keeps its source text.
pub fn contract_text(expression: &Expression) -> Option<String> {
    match &expression.binding {
        ExpressionBinding::Literal | ExpressionBinding::Symbol { .. } => {
            Some(expression.text.clone())
        }
        ExpressionBinding::Member { qualified_name } => Some(qualified_name.clone()),
        ExpressionBinding::Unresolved => None,
    }
}

/// Lazy thread-safety mode, fully qualified
pub fn mode_text(expression: &Expression) -> Option<String> {
    match &expression.binding {
        ExpressionBinding::Literal => Some(expression.text.clone()),
        ExpressionBinding::Member { qualified_name }
        | ExpressionBinding::Symbol { qualified_name } => Some(qualified_name.clone()),
        ExpressionBinding::Unresolved => None,
    }
}
