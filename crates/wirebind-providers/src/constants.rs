//! Provider constants

// ============================================================================
// EMITTER DEFAULTS
// ============================================================================

/// Namespace of the generated partial class
pub const DEFAULT_EMIT_NAMESPACE: &str = "Wirebind";

/// Name of the generated partial class
pub const DEFAULT_EMIT_CLASS_NAME: &str = "Registrations";

/// Expression of the runtime service registry in generated code
pub const DEFAULT_EMIT_RESOLVER: &str = "global::Wirebind.Locator.CurrentMutable";

/// Generated method wiring every registration
pub const GENERATED_METHOD_NAME: &str = "RegisterGenerated";

/// Prefix forcing fully qualified lookup of emitted type names
pub const GLOBAL_ALIAS_PREFIX: &str = "global::";

/// Built-in type keywords, never alias-qualified
pub const KEYWORD_TYPE_NAMES: &[&str] = &[
    "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint", "nint",
    "nuint", "long", "ulong", "short", "ushort", "object", "string", "dynamic",
];

/// Template emitter identifier
pub const TEMPLATE_EMITTER_NAME: &str = "template";

// ============================================================================
// SYMBOL MODEL
// ============================================================================

/// Provider identifier of the in-memory symbol model
pub const IN_MEMORY_MODEL_NAME: &str = "in_memory";
