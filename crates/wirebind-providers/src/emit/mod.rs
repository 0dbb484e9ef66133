//! Code emitter providers
//!
//! | Emitter | Description |
//! |---------|-------------|
//! | [`TemplateEmitter`] | Handlebars templates rendering a partial class |

/// Handlebars-based emitter
pub mod template;

use crate::constants::{DEFAULT_EMIT_CLASS_NAME, DEFAULT_EMIT_NAMESPACE, DEFAULT_EMIT_RESOLVER};
use serde::{Deserialize, Serialize};

pub use template::{TemplateEmitter, global_name};

/// Shape of the generated code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Namespace of the generated partial class
    pub namespace: String,
    /// Name of the generated partial class
    pub class_name: String,
    /// Expression of the runtime service registry
    pub resolver: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_EMIT_NAMESPACE.to_string(),
            class_name: DEFAULT_EMIT_CLASS_NAME.to_string(),
            resolver: DEFAULT_EMIT_RESOLVER.to_string(),
        }
    }
}
