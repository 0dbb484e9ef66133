//! Invocation sites
//!
//! What the source scanner hands to the extractor: a call shaped like a
//! registration, with whatever the host could resolve about it.

use super::symbols::{Location, TypeRef};
use serde::{Deserialize, Serialize};

/// Semantic resolution of an invoked method
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodBinding {
    /// Fully qualified type declaring the method
    pub containing_type: String,
    /// Invoked through extension-method syntax
    #[serde(default)]
    pub is_extension: bool,
    /// Declared ordinary parameter names, in order
    #[serde(default)]
    pub parameters: Vec<String>,
}

/// What an argument expression resolved to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpressionBinding {
    /// Literal value; the source text is already a valid expression
    Literal,
    /// Field, property or enum member
    Member { qualified_name: String },
    /// Any other resolvable symbol (method call, local, parameter)
    Symbol { qualified_name: String },
    /// Could not be resolved
    Unresolved,
}

/// Argument expression with its source text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expression {
    pub text: String,
    pub binding: ExpressionBinding,
}

impl Expression {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            binding: ExpressionBinding::Literal,
        }
    }

    pub fn member(text: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            binding: ExpressionBinding::Member {
                qualified_name: qualified_name.into(),
            },
        }
    }

    pub fn symbol(text: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            binding: ExpressionBinding::Symbol {
                qualified_name: qualified_name.into(),
            },
        }
    }

    pub fn unresolved(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            binding: ExpressionBinding::Unresolved,
        }
    }
}

/// One ordinary argument; `name` is set for named arguments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    pub name: Option<String>,
    pub expression: Expression,
}

impl Argument {
    pub fn positional(expression: Expression) -> Self {
        Self {
            name: None,
            expression,
        }
    }

    pub fn named(name: impl Into<String>, expression: Expression) -> Self {
        Self {
            name: Some(name.into()),
            expression,
        }
    }
}

/// A call syntactically shaped like a registration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationSite {
    /// Simple member name at the call site
    pub method_name: String,
    pub type_arguments: Vec<TypeRef>,
    pub arguments: Vec<Argument>,
    pub location: Location,
    /// Absent when the call did not bind to a method
    pub binding: Option<MethodBinding>,
}

impl InvocationSite {
    /// Expression bound to the declared parameter `parameter`
    ///
    /// Positional arguments bind by index, named arguments by name.
    pub fn argument_for(&self, parameter: &str) -> Option<&Expression> {
        let declared = self
            .binding
            .as_ref()
            .map(|b| b.parameters.as_slice())
            .unwrap_or_default();
        self.arguments
            .iter()
            .enumerate()
            .find(|(index, argument)| match &argument.name {
                Some(name) => name == parameter,
                None => declared.get(*index).is_some_and(|p| p == parameter),
            })
            .map(|(_, argument)| &argument.expression)
    }
}
