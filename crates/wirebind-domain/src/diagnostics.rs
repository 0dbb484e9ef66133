//! Diagnostics
//!
//! Structured error/warning records reported while extracting and validating
//! registrations. The `D0xx` identifiers are stable.
//!
//! Diagnostics are defined with [`define_diagnostics!`], which generates the
//! enum, its `Display` implementation and the id/severity/location accessors.
//!
//! ```ignore
//! define_diagnostics! {
//!     pub enum Diagnostic {
//!         #[diagnostic(
//!             id = "D001",
//!             severity = Error,
//!             title = "No valid constructor",
//!             message = "'{type_name}' has multiple constructors and none is marked"
//!         )]
//!         NoValidConstructor { type_name: String },
//!     }
//! }
//! ```

use crate::value_objects::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

/// Macro to define diagnostic enums with automatic accessors
///
/// Every variant receives an extra `location` field. All other fields must be
/// referenced by the message template.
#[macro_export]
macro_rules! define_diagnostics {
    (
        $vis:vis enum $name:ident {
            $(
                #[diagnostic(
                    id = $id:literal,
                    severity = $severity:ident,
                    title = $title:literal,
                    message = $msg:literal
                )]
                $variant:ident {
                    $( $field:ident : $field_ty:ty ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
        $vis enum $name {
            $(
                $variant {
                    $( $field: $field_ty, )*
                    location: $crate::value_objects::Location,
                }
            ),*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variant { $( $field, )* .. } => {
                            write!(f, $msg, $( $field = $field ),*)
                        }
                    ),*
                }
            }
        }

        impl $name {
            /// Stable identifier
            pub fn id(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $id ),*
                }
            }

            pub fn severity(&self) -> $crate::diagnostics::Severity {
                match self {
                    $( Self::$variant { .. } => $crate::diagnostics::Severity::$severity ),*
                }
            }

            /// Short description of the diagnostic kind
            pub fn title(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $title ),*
                }
            }

            pub fn location(&self) -> &$crate::value_objects::Location {
                match self {
                    $( Self::$variant { location, .. } )|* => location,
                }
            }

            pub fn message(&self) -> String {
                self.to_string()
            }

            pub fn is_error(&self) -> bool {
                self.severity() == $crate::diagnostics::Severity::Error
            }

            /// `(id, severity, title)` of every kind, in declaration order
            pub fn catalog() -> &'static [(&'static str, $crate::diagnostics::Severity, &'static str)] {
                &[ $( ($id, $crate::diagnostics::Severity::$severity, $title) ),* ]
            }
        }
    };
}

define_diagnostics! {
    pub enum Diagnostic {
        #[diagnostic(
            id = "D001",
            severity = Error,
            title = "No valid constructor",
            message = "'{type_name}' has no unambiguous constructor: mark exactly one constructor with the constructor injection attribute"
        )]
        NoValidConstructor { type_name: String },

        #[diagnostic(
            id = "D002",
            severity = Error,
            title = "Injected property must be settable",
            message = "Property '{property}' is marked for injection but has no internal or public setter"
        )]
        PropertyMustBeSettable { property: String },

        #[diagnostic(
            id = "D003",
            severity = Error,
            title = "Multiple constructors marked",
            message = "'{type_name}' has more than one constructor marked with the constructor injection attribute"
        )]
        MultipleConstructorsMarked { type_name: String },

        #[diagnostic(
            id = "D004",
            severity = Error,
            title = "Constructor must be public or internal",
            message = "The injected constructor of '{type_name}' must be public or internal"
        )]
        ConstructorsMustBePublic { type_name: String },

        #[diagnostic(
            id = "D005",
            severity = Error,
            title = "Circular constructor dependency",
            message = "'{type_name}' has a circular constructor dependency: {cycle}"
        )]
        ConstructorsMustNotHaveCircularDependency { type_name: String, cycle: String },

        #[diagnostic(
            id = "D006",
            severity = Warning,
            title = "Interface registered multiple times",
            message = "'{interface}' is registered more than once; only the first registration is used to resolve dependencies"
        )]
        InterfaceRegisteredMultipleTimes { interface: String },

        #[diagnostic(
            id = "D007",
            severity = Error,
            title = "Lazy parameter not registered lazily",
            message = "Parameter '{parameter}' of '{type_name}' is a lazy wrapper over '{target}', which is not registered with RegisterLazySingleton"
        )]
        LazyParameterNotRegisteredLazy { type_name: String, parameter: String, target: String },
    }
}

/// A registration abandoned because of one or more diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub diagnostics: Vec<Diagnostic>,
}

impl Rejection {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

impl From<Diagnostic> for Rejection {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Rejection> for Vec<Diagnostic> {
    fn from(rejection: Rejection) -> Self {
        rejection.diagnostics
    }
}
