//! Registration records
//!
//! A [`RegistrationRecord`] is the immutable result of extracting one
//! registration call. Records compare structurally, including the order of
//! their dependency lists, so two extractions of the same call are equal.

use super::dependency::Dependency;
use super::symbols::{Location, TypeRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifetime requested by the registration call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistrationKind {
    /// `Register`: a new instance per resolution
    Transient,
    /// `RegisterLazySingleton`: one instance built on first use
    LazySingleton {
        /// Thread-safety mode expression, fully qualified
        mode: Option<String>,
    },
    /// `RegisterConstant`: instance supplied by caller code
    Constant,
}

impl RegistrationKind {
    pub fn is_lazy_singleton(&self) -> bool {
        matches!(self, Self::LazySingleton { .. })
    }
}

impl fmt::Display for RegistrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transient => write!(f, "transient"),
            Self::LazySingleton { .. } => write!(f, "lazy singleton"),
            Self::Constant => write!(f, "constant"),
        }
    }
}

/// Validated-or-not metadata for one registration call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub interface: TypeRef,
    pub concrete: TypeRef,
    /// Parameters of the single selected constructor, in declaration order
    pub constructor_dependencies: Vec<Dependency>,
    /// Injected properties, most-derived type first
    pub property_dependencies: Vec<Dependency>,
    /// Contract key as an emittable expression
    pub contract: Option<String>,
    pub kind: RegistrationKind,
    /// Location of the originating invocation
    pub location: Location,
}

impl RegistrationRecord {
    /// Key used for duplicate detection and dependency lookup
    pub fn key(&self) -> &str {
        self.interface.name()
    }

    pub fn is_lazy_singleton(&self) -> bool {
        self.kind.is_lazy_singleton()
    }

    /// Thread-safety mode of a lazy singleton
    pub fn mode(&self) -> Option<&str> {
        match &self.kind {
            RegistrationKind::LazySingleton { mode } => mode.as_deref(),
            _ => None,
        }
    }
}
