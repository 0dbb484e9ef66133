//! Dependency classification value objects

use super::symbols::{Location, TypeRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a parameter or property type is satisfied at runtime
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "type", rename_all = "snake_case")]
pub enum DependencyKind {
    /// Resolve the type itself
    Plain(TypeRef),
    /// Resolve a lazily constructed wrapper over the inner type
    Deferred(TypeRef),
    /// Resolve every registered implementation of the item type
    CollectionOf(TypeRef),
}

impl DependencyKind {
    /// Type the resolver is asked for (inner/item type for wrappers)
    pub fn target(&self) -> &TypeRef {
        match self {
            Self::Plain(ty) | Self::Deferred(ty) | Self::CollectionOf(ty) => ty,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(_))
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(ty) => write!(f, "{ty}"),
            Self::Deferred(ty) => write!(f, "lazy {ty}"),
            Self::CollectionOf(ty) => write!(f, "all of {ty}"),
        }
    }
}

/// A named constructor parameter or injected property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub kind: DependencyKind,
    pub location: Option<Location>,
}

impl Dependency {
    pub fn new(name: impl Into<String>, kind: DependencyKind, location: Option<Location>) -> Self {
        Self {
            name: name.into(),
            kind,
            location,
        }
    }
}
