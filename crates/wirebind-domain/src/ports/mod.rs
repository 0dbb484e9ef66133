//! Domain Ports
//!
//! Interfaces the analysis core consumes and exposes. Implementations live in
//! `wirebind-providers`.

/// Code emission port
pub mod emitter;
/// Symbol query port
pub mod symbols;

pub use emitter::RegistrationEmitter;
pub use symbols::SymbolModel;
