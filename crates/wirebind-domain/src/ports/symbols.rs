//! Symbol Query Port
//!
//! Narrow read-only view over the host compiler's symbol model. The analysis
//! services depend only on this trait:
//! - The trait is defined here (wirebind-domain)
//! - The in-memory implementation lives in wirebind-providers
//! - A host compiler integration implements the same trait
//!
//! Implementations must be pure for the lifetime of one analysis: the same
//! query returns the same answer, and no query mutates host state.

use crate::value_objects::{
    Accessibility, AttributeRef, ConstructorCandidate, MemberRef, PropertyCandidate, TypeRef,
};

/// Symbol query facade
///
/// # Example
///
/// ```ignore
/// use wirebind_domain::ports::SymbolModel;
///
/// fn marked_properties(model: &dyn SymbolModel, ty: &TypeRef) -> usize {
///     model
///         .base_types_and_self(ty)
///         .iter()
///         .flat_map(|level| model.properties(level))
///         .filter(|p| !model.attributes(&p.member()).is_empty())
///         .count()
/// }
/// ```
pub trait SymbolModel: Send + Sync {
    /// Every constructor declared or synthesized for the type
    fn constructors(&self, ty: &TypeRef) -> Vec<ConstructorCandidate>;

    /// Properties declared directly on the type (not inherited)
    fn properties(&self, ty: &TypeRef) -> Vec<PropertyCandidate>;

    /// Inheritance chain, most-derived (the type itself) first
    fn base_types_and_self(&self, ty: &TypeRef) -> Vec<TypeRef>;

    /// Attributes applied to a member
    fn attributes(&self, member: &MemberRef) -> Vec<AttributeRef>;

    /// Resolve a well-known type by metadata name
    ///
    /// Returns `None` when the defining library is not referenced by the
    /// compilation.
    fn resolve_well_known(&self, metadata_name: &str) -> Option<TypeRef>;

    /// Generic type arguments, in order; empty for non-generic types
    fn generic_arguments(&self, ty: &TypeRef) -> Vec<TypeRef>;

    /// Unbound generic definition of a constructed type, or the type itself
    fn original_definition(&self, ty: &TypeRef) -> TypeRef;

    /// Declared accessibility of a member
    fn accessibility(&self, member: &MemberRef) -> Accessibility;
}
