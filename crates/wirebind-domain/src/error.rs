//! Error handling types
//!
//! These errors cover the ambient machinery around the analysis (loading
//! symbol models, configuration, emission). Problems with the analyzed
//! registrations themselves are never errors: they are reported as
//! [`Diagnostic`](crate::diagnostics::Diagnostic) values.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed underlying cause
pub type Source = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for wirebind
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<Source>,
    },

    /// A caller passed something the operation cannot accept
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Malformed or inconsistent symbol model document
    #[error("Symbol model error: {message}")]
    Model {
        message: String,
        #[source]
        source: Option<Source>,
    },

    /// Template registration or rendering failed
    #[error("Emit error: {message}")]
    Emit {
        message: String,
        #[source]
        source: Option<Source>,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<Source>,
    },

    /// Failure in a runtime service such as the log subscriber
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        message: String,
        #[source]
        source: Option<Source>,
    },
}

fn boxed<E: std::error::Error + Send + Sync + 'static>(source: E) -> Option<Source> {
    Some(Box::new(source))
}

impl Error {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: boxed(source),
        }
    }

    pub fn model<S: Into<String>>(message: S) -> Self {
        Self::Model {
            message: message.into(),
            source: None,
        }
    }

    pub fn model_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Model {
            message: message.into(),
            source: boxed(source),
        }
    }

    pub fn emit_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Emit {
            message: message.into(),
            source: boxed(source),
        }
    }

    /// Validation failure with no underlying cause
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: boxed(source),
        }
    }

    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: boxed(source),
        }
    }
}
