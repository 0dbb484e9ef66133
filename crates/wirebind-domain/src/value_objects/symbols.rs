//! Symbol model value objects
//!
//! Non-owning handles into a host symbol model. The model itself answers all
//! structural questions (see [`SymbolModel`](crate::ports::SymbolModel)); the
//! handles only carry identity and a display name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a symbol inside one symbol model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// Handle to a declared or constructed type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    id: SymbolId,
    name: String,
}

impl TypeRef {
    pub fn new(id: SymbolId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    /// Fully qualified display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved-symbol identity comparison
    pub fn is_same_symbol(&self, other: &TypeRef) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Declared accessibility, ordered from least to most accessible
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Private,
    Protected,
    Internal,
    #[default]
    Public,
}

impl Accessibility {
    /// `internal` or `public`
    pub fn is_at_least_internal(self) -> bool {
        self >= Self::Internal
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => write!(f, "private"),
            Self::Protected => write!(f, "protected"),
            Self::Internal => write!(f, "internal"),
            Self::Public => write!(f, "public"),
        }
    }
}

/// Source location (1-based line and column)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Member of a type that can carry attributes and accessibility
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRef {
    /// Constructor by declaration ordinal
    Constructor { owner: TypeRef, ordinal: usize },
    /// Property by name
    Property { owner: TypeRef, name: String },
    /// Setter accessor of a property
    PropertySetter { owner: TypeRef, name: String },
}

impl MemberRef {
    pub fn owner(&self) -> &TypeRef {
        match self {
            Self::Constructor { owner, .. }
            | Self::Property { owner, .. }
            | Self::PropertySetter { owner, .. } => owner,
        }
    }
}

/// Attribute application; identified by the attribute class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeRef {
    pub class: TypeRef,
}

/// One declared constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    pub location: Option<Location>,
}

/// One constructor of a concrete type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstructorCandidate {
    pub member: MemberRef,
    pub parameters: Vec<Parameter>,
    pub is_static: bool,
    /// Generated by the host compiler rather than declared in source
    pub is_synthesized: bool,
    pub location: Option<Location>,
}

/// One property declared on a type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyCandidate {
    pub owner: TypeRef,
    pub name: String,
    pub ty: TypeRef,
    pub has_setter: bool,
    pub location: Option<Location>,
    pub setter_location: Option<Location>,
}

impl PropertyCandidate {
    pub fn member(&self) -> MemberRef {
        MemberRef::Property {
            owner: self.owner.clone(),
            name: self.name.clone(),
        }
    }

    pub fn setter(&self) -> MemberRef {
        MemberRef::PropertySetter {
            owner: self.owner.clone(),
            name: self.name.clone(),
        }
    }

    /// `Owner.Property`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.owner.name(), self.name)
    }
}
