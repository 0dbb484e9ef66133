//! Serialized symbol model document
//!
//! A compilation snapshot in JSON or YAML: the well-known names the
//! compilation references, type declarations with their constructors and
//! properties, and the invocation sites found by the source scanner.
//!
//! ```yaml
//! references:
//!   - System.Lazy`1
//! types:
//!   - name: Test.Service1
//!     constructors:
//!       - parameters:
//!           - { name: dep, type: Test.IService2 }
//!   - name: System.Lazy<Test.IService2>
//!     definition: System.Lazy`1
//!     type_arguments: [Test.IService2]
//! invocations:
//!   - method: Register
//!     type_arguments: [Test.IService1, Test.Service1]
//!     location: { file: Program.cs, line: 12, column: 9 }
//!     binding: { containing_type: Wirebind.Registrations }
//! ```
//!
//! Every constructed generic used as a parameter, property or type argument
//! needs its own declaration with `definition` and `type_arguments`, as
//! `System.Lazy<Test.IService2>` has above. An undeclared one is only a
//! name: it is treated as a plain dependency, so lazy and collection checks
//! do not apply to it.

use super::memory::InMemorySymbolModel;
use serde::{Deserialize, Serialize};
use wirebind_domain::error::{Error, Result};
use wirebind_domain::value_objects::{
    Accessibility, Argument, Expression, ExpressionBinding, InvocationSite, Location,
    MethodBinding,
};

/// Root of a model document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDocument {
    /// Metadata names of well-known types resolvable in this compilation
    pub references: Vec<String>,
    pub types: Vec<TypeDecl>,
    pub invocations: Vec<InvocationDecl>,
}

/// Type declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeDecl {
    pub name: String,
    pub base: Option<String>,
    /// Generic definition of a constructed generic type
    pub definition: Option<String>,
    pub type_arguments: Vec<String>,
    pub constructors: Vec<ConstructorDecl>,
    pub properties: Vec<PropertyDecl>,
}

/// Constructor declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructorDecl {
    pub accessibility: Accessibility,
    pub is_static: bool,
    /// Compiler-generated (e.g. record copy constructors)
    pub is_synthesized: bool,
    pub attributes: Vec<String>,
    pub parameters: Vec<ParameterDecl>,
    pub location: Option<Location>,
}

/// Constructor parameter declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub location: Option<Location>,
}

/// Property declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Setter accessibility; absent for get-only properties
    #[serde(default)]
    pub setter: Option<Accessibility>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub setter_location: Option<Location>,
}

/// Invocation site as reported by the source scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationDecl {
    pub method: String,
    #[serde(default)]
    pub type_arguments: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<ArgumentDecl>,
    pub location: Location,
    #[serde(default)]
    pub binding: Option<MethodBinding>,
}

/// Ordinary argument; literal unless a binding says otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDecl {
    #[serde(default)]
    pub name: Option<String>,
    pub text: String,
    #[serde(default = "literal_binding")]
    pub binding: ExpressionBinding,
}

fn literal_binding() -> ExpressionBinding {
    ExpressionBinding::Literal
}

impl From<&ArgumentDecl> for Argument {
    fn from(decl: &ArgumentDecl) -> Self {
        Self {
            name: decl.name.clone(),
            expression: Expression {
                text: decl.text.clone(),
                binding: decl.binding.clone(),
            },
        }
    }
}

impl ModelDocument {
    /// Parse a YAML document
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text)
            .map_err(|e| Error::model_with_source("Failed to parse YAML model document", e))
    }

    /// Parse a JSON document
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| Error::model_with_source("Failed to parse JSON model document", e))
    }

    /// Build the symbol model and the invocation sites bound to it
    pub fn into_parts(self) -> Result<(InMemorySymbolModel, Vec<InvocationSite>)> {
        let mut model = InMemorySymbolModel::from_document(&self)?;
        let sites = self
            .invocations
            .iter()
            .map(|invocation| model.invocation_site(invocation))
            .collect();
        Ok((model, sites))
    }
}
