//! Domain constants
//!
//! Well-known names shared by the analysis and emission layers.

// ============================================================================
// REGISTRATION CALL SHAPES
// ============================================================================

/// Transient registration method
pub const REGISTER_METHOD: &str = "Register";

/// Deferred (lazily constructed) singleton registration method
pub const REGISTER_LAZY_SINGLETON_METHOD: &str = "RegisterLazySingleton";

/// Pre-built instance registration method
pub const REGISTER_CONSTANT_METHOD: &str = "RegisterConstant";

/// Declared parameter name carrying the contract key
pub const CONTRACT_PARAMETER: &str = "contract";

/// Declared parameter name carrying the lazy thread-safety mode
pub const MODE_PARAMETER: &str = "mode";

/// Upper bound on ordinary (non-type) arguments of a recognized call
pub const MAX_ORDINARY_ARGUMENTS: usize = 2;

/// Type declaring the registration stubs
pub const DEFAULT_REGISTRATIONS_TYPE: &str = "Wirebind.Registrations";

// ============================================================================
// WELL-KNOWN METADATA NAMES
// ============================================================================

/// Deferred wrapper generic definition
pub const LAZY_METADATA_NAME: &str = "System.Lazy`1";

/// Homogeneous sequence generic definition
pub const ENUMERABLE_METADATA_NAME: &str = "System.Collections.Generic.IEnumerable`1";

/// Marker attribute designating the injectable constructor
pub const CONSTRUCTOR_MARKER_METADATA_NAME: &str = "Wirebind.DependencyInjectionConstructorAttribute";

/// Marker attribute designating an injectable property
pub const PROPERTY_MARKER_METADATA_NAME: &str = "Wirebind.DependencyInjectionPropertyAttribute";
