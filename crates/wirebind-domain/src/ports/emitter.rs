//! Code Emitter Port
//!
//! Turns validated registration records into output source text. Output must
//! be deterministic: the same records in the same order produce the same text.

use crate::error::Result;
use crate::value_objects::RegistrationRecord;

/// Registration code emitter
pub trait RegistrationEmitter: Send + Sync {
    /// Render the wiring code for the validated records
    fn emit(&self, records: &[RegistrationRecord]) -> Result<String>;

    /// Get the name/identifier of this emitter implementation
    fn emitter_name(&self) -> &str;
}
