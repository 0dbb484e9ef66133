//! In-memory symbol model
//!
//! An arena of types indexed by [`SymbolId`], built from a [`ModelDocument`].
//! Names referenced but never declared (parameter types, attribute classes,
//! generic definitions) are interned as bare types with no members. A
//! constructed generic such as `System.Lazy<Test.IB>` must therefore be
//! declared with its `definition` and `type_arguments` to be seen as generic;
//! undeclared ones are logged at warn level.

use super::document::{ConstructorDecl, InvocationDecl, ModelDocument, PropertyDecl, TypeDecl};
use crate::constants::IN_MEMORY_MODEL_NAME;
use std::collections::{HashMap, HashSet};
use wirebind_domain::error::{Error, Result};
use wirebind_domain::ports::SymbolModel;
use wirebind_domain::value_objects::{
    Accessibility, Argument, AttributeRef, ConstructorCandidate, InvocationSite, MemberRef,
    Parameter, PropertyCandidate, SymbolId, TypeRef,
};

struct ConstructorEntry {
    candidate: ConstructorCandidate,
    accessibility: Accessibility,
    attributes: Vec<AttributeRef>,
}

struct PropertyEntry {
    candidate: PropertyCandidate,
    accessibility: Accessibility,
    setter_accessibility: Option<Accessibility>,
    attributes: Vec<AttributeRef>,
}

#[derive(Default)]
struct TypeEntry {
    name: String,
    base: Option<SymbolId>,
    definition: Option<SymbolId>,
    type_arguments: Vec<SymbolId>,
    constructors: Vec<ConstructorEntry>,
    properties: Vec<PropertyEntry>,
}

/// Symbol model over an in-memory type arena
#[derive(Default)]
pub struct InMemorySymbolModel {
    types: Vec<TypeEntry>,
    index: HashMap<String, SymbolId>,
    references: HashSet<SymbolId>,
    /// Ids below this are declared types
    declared: usize,
}

impl InMemorySymbolModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from a parsed document
    ///
    /// Fails on duplicate type declarations, unknown base types and
    /// inheritance cycles.
    pub fn from_document(document: &ModelDocument) -> Result<Self> {
        let mut model = Self::new();

        // Declared types take the first ids, in declaration order
        for decl in &document.types {
            if model.index.contains_key(&decl.name) {
                return Err(Error::model(format!(
                    "Type '{}' is declared more than once",
                    decl.name
                )));
            }
            model.push_type(&decl.name);
        }

        model.declared = model.types.len();
        for decl in &document.types {
            model.declare(decl)?;
        }
        model.check_inheritance()?;

        for reference in &document.references {
            let id = model.intern(reference);
            model.references.insert(id);
        }

        tracing::debug!(
            provider = IN_MEMORY_MODEL_NAME,
            types = model.types.len(),
            references = model.references.len(),
            "symbol model built"
        );
        Ok(model)
    }

    pub fn provider_name(&self) -> &str {
        IN_MEMORY_MODEL_NAME
    }

    /// Handle of the type named `name`, if known to the model
    pub fn type_ref(&self, name: &str) -> Option<TypeRef> {
        self.index.get(name).map(|id| self.handle(*id))
    }

    /// Number of types in the arena, interned ones included
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Constructed generic names that were referenced but never declared
    ///
    /// These carry no definition or type arguments, so analysis treats them
    /// as plain types.
    pub fn undeclared_generic_names(&self) -> Vec<&str> {
        self.types[self.declared..]
            .iter()
            .map(|entry| entry.name.as_str())
            .filter(|name| is_constructed_generic(name))
            .collect()
    }

    /// Resolve an invocation declaration against this model
    pub fn invocation_site(&mut self, decl: &InvocationDecl) -> InvocationSite {
        let type_arguments = decl
            .type_arguments
            .iter()
            .map(|name| self.intern_ref(name))
            .collect();
        InvocationSite {
            method_name: decl.method.clone(),
            type_arguments,
            arguments: decl.arguments.iter().map(Argument::from).collect(),
            location: decl.location.clone(),
            binding: decl.binding.clone(),
        }
    }

    fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(id) = self.index.get(name) {
            return *id;
        }
        if is_constructed_generic(name) {
            tracing::warn!(
                provider = IN_MEMORY_MODEL_NAME,
                name,
                "undeclared generic type is treated as a plain type; declare it with definition and type_arguments"
            );
        }
        self.push_type(name)
    }

    fn push_type(&mut self, name: &str) -> SymbolId {
        let id = SymbolId(self.types.len() as u32);
        self.types.push(TypeEntry {
            name: name.to_string(),
            ..TypeEntry::default()
        });
        self.index.insert(name.to_string(), id);
        id
    }

    fn intern_ref(&mut self, name: &str) -> TypeRef {
        let id = self.intern(name);
        TypeRef::new(id, name)
    }

    fn handle(&self, id: SymbolId) -> TypeRef {
        TypeRef::new(id, self.types[id.0 as usize].name.as_str())
    }

    /// Fill in a declared type
    fn declare(&mut self, decl: &TypeDecl) -> Result<()> {
        let owner = self.intern_ref(&decl.name);

        let base = match &decl.base {
            Some(name) => Some(
                self.index
                    .get(name)
                    .copied()
                    .filter(|id| (id.0 as usize) < self.declared)
                    .ok_or_else(|| {
                        Error::model(format!(
                            "Type '{}' derives from undeclared type '{name}'",
                            decl.name
                        ))
                    })?,
            ),
            None => None,
        };
        let definition = decl.definition.as_deref().map(|name| self.intern(name));
        let type_arguments: Vec<SymbolId> = decl
            .type_arguments
            .iter()
            .map(|name| self.intern(name))
            .collect();

        let constructors: Vec<ConstructorEntry> = decl
            .constructors
            .iter()
            .enumerate()
            .map(|(ordinal, ctor)| self.constructor_entry(&owner, ordinal, ctor))
            .collect();
        let properties: Vec<PropertyEntry> = decl
            .properties
            .iter()
            .map(|property| self.property_entry(&owner, property))
            .collect();

        let entry = &mut self.types[owner.id().0 as usize];
        entry.base = base;
        entry.definition = definition;
        entry.type_arguments = type_arguments;
        entry.constructors = constructors;
        entry.properties = properties;
        Ok(())
    }

    fn constructor_entry(
        &mut self,
        owner: &TypeRef,
        ordinal: usize,
        decl: &ConstructorDecl,
    ) -> ConstructorEntry {
        let parameters = decl
            .parameters
            .iter()
            .map(|p| Parameter {
                name: p.name.clone(),
                ty: self.intern_ref(&p.ty),
                location: p.location.clone(),
            })
            .collect();
        ConstructorEntry {
            candidate: ConstructorCandidate {
                member: MemberRef::Constructor {
                    owner: owner.clone(),
                    ordinal,
                },
                parameters,
                is_static: decl.is_static,
                is_synthesized: decl.is_synthesized,
                location: decl.location.clone(),
            },
            accessibility: decl.accessibility,
            attributes: self.attributes_of(&decl.attributes),
        }
    }

    fn property_entry(&mut self, owner: &TypeRef, decl: &PropertyDecl) -> PropertyEntry {
        PropertyEntry {
            candidate: PropertyCandidate {
                owner: owner.clone(),
                name: decl.name.clone(),
                ty: self.intern_ref(&decl.ty),
                has_setter: decl.setter.is_some(),
                location: decl.location.clone(),
                setter_location: decl.setter_location.clone(),
            },
            accessibility: decl.accessibility,
            setter_accessibility: decl.setter,
            attributes: self.attributes_of(&decl.attributes),
        }
    }

    fn attributes_of(&mut self, names: &[String]) -> Vec<AttributeRef> {
        names
            .iter()
            .map(|name| AttributeRef {
                class: self.intern_ref(name),
            })
            .collect()
    }

    fn check_inheritance(&self) -> Result<()> {
        for (start, entry) in self.types.iter().enumerate() {
            let mut seen = HashSet::from([start]);
            let mut current = entry.base;
            while let Some(id) = current {
                if !seen.insert(id.0 as usize) {
                    return Err(Error::model(format!(
                        "Inheritance cycle through type '{}'",
                        entry.name
                    )));
                }
                current = self.types[id.0 as usize].base;
            }
        }
        Ok(())
    }

    /// Arena entry of `ty`; handles from another model do not resolve
    fn entry(&self, ty: &TypeRef) -> Option<&TypeEntry> {
        self.types
            .get(ty.id().0 as usize)
            .filter(|entry| entry.name == ty.name())
    }

    fn constructor(&self, owner: &TypeRef, ordinal: usize) -> Option<&ConstructorEntry> {
        self.entry(owner)?.constructors.get(ordinal)
    }

    fn property(&self, owner: &TypeRef, name: &str) -> Option<&PropertyEntry> {
        self.entry(owner)?
            .properties
            .iter()
            .find(|p| p.candidate.name == name)
    }
}

fn is_constructed_generic(name: &str) -> bool {
    name.contains('<')
}

impl SymbolModel for InMemorySymbolModel {
    fn constructors(&self, ty: &TypeRef) -> Vec<ConstructorCandidate> {
        self.entry(ty)
            .map(|entry| {
                entry
                    .constructors
                    .iter()
                    .map(|c| c.candidate.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn properties(&self, ty: &TypeRef) -> Vec<PropertyCandidate> {
        self.entry(ty)
            .map(|entry| {
                entry
                    .properties
                    .iter()
                    .map(|p| p.candidate.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn base_types_and_self(&self, ty: &TypeRef) -> Vec<TypeRef> {
        let mut chain = vec![ty.clone()];
        let mut current = self.entry(ty).and_then(|entry| entry.base);
        while let Some(id) = current {
            chain.push(self.handle(id));
            current = self.types[id.0 as usize].base;
        }
        chain
    }

    fn attributes(&self, member: &MemberRef) -> Vec<AttributeRef> {
        let attributes = match member {
            MemberRef::Constructor { owner, ordinal } => {
                self.constructor(owner, *ordinal).map(|c| &c.attributes)
            }
            MemberRef::Property { owner, name } => self.property(owner, name).map(|p| &p.attributes),
            MemberRef::PropertySetter { .. } => None,
        };
        attributes.cloned().unwrap_or_default()
    }

    fn resolve_well_known(&self, metadata_name: &str) -> Option<TypeRef> {
        self.index
            .get(metadata_name)
            .filter(|id| self.references.contains(*id))
            .map(|id| self.handle(*id))
    }

    fn generic_arguments(&self, ty: &TypeRef) -> Vec<TypeRef> {
        self.entry(ty)
            .map(|entry| entry.type_arguments.iter().map(|id| self.handle(*id)).collect())
            .unwrap_or_default()
    }

    fn original_definition(&self, ty: &TypeRef) -> TypeRef {
        self.entry(ty)
            .and_then(|entry| entry.definition)
            .map_or_else(|| ty.clone(), |id| self.handle(id))
    }

    fn accessibility(&self, member: &MemberRef) -> Accessibility {
        match member {
            MemberRef::Constructor { owner, ordinal } => self
                .constructor(owner, *ordinal)
                .map_or(Accessibility::Private, |c| c.accessibility),
            MemberRef::Property { owner, name } => self
                .property(owner, name)
                .map_or(Accessibility::Private, |p| p.accessibility),
            // A setter is never more visible than its property
            MemberRef::PropertySetter { owner, name } => self
                .property(owner, name)
                .and_then(|p| p.setter_accessibility.map(|s| s.min(p.accessibility)))
                .unwrap_or(Accessibility::Private),
        }
    }
}
