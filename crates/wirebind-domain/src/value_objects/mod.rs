//! Domain Value Objects
//!
//! Immutable values exchanged between the symbol model, the analysis
//! services and the code emitter.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeRef`] | Handle to a type in the host symbol model |
//! | [`ConstructorCandidate`] | One constructor of a concrete type |
//! | [`PropertyCandidate`] | One property declared on a type |
//! | [`DependencyKind`] | Plain, deferred or collection dependency |
//! | [`RegistrationRecord`] | Extracted metadata of one registration call |
//! | [`InvocationSite`] | Registration-shaped call found in source |

/// Dependency classification
pub mod dependency;
/// Invocation sites produced by the source scanner
pub mod invocation;
/// Registration records
pub mod registration;
/// Symbol model handles
pub mod symbols;

pub use dependency::{Dependency, DependencyKind};
pub use invocation::{Argument, Expression, ExpressionBinding, InvocationSite, MethodBinding};
pub use registration::{RegistrationKind, RegistrationRecord};
pub use symbols::{
    Accessibility, AttributeRef, ConstructorCandidate, Location, MemberRef, Parameter,
    PropertyCandidate, SymbolId, TypeRef,
};
