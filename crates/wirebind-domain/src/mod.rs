//! # wirebind - Domain Layer
//!
//! Core types of the registration analyzer: symbol model handles and the
//! port used to query them, registration records, dependency
//! classifications and diagnostics.
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Type handles, invocation sites, registration records |
//! | [`ports`] | `SymbolModel` and `RegistrationEmitter` interfaces |
//! | [`diagnostics`] | Stable `D0xx` diagnostics and rejections |
//! | [`error`] | Error type for the ambient machinery |
//! | [`constants`] | Well-known metadata names and call shapes |

/// Domain constants
pub mod constants;
/// Diagnostics reported during extraction and validation
#[macro_use]
pub mod diagnostics;
/// Error handling types
pub mod error;
/// Domain ports
pub mod ports;
/// Value objects
pub mod value_objects;

pub use diagnostics::{Diagnostic, Rejection, Severity};
pub use error::{Error, Result};
pub use ports::{RegistrationEmitter, SymbolModel};
pub use value_objects::*;
