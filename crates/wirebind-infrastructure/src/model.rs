//! Symbol model document loading
//!
//! Reads a model document from disk, picking the parser by file extension,
//! and binds its invocation sites to the resulting in-memory model.

use crate::constants::{JSON_MODEL_EXTENSION, YAML_MODEL_EXTENSIONS};
use crate::error_ext::ErrorContext;
use std::path::Path;
use wirebind_domain::error::{Error, Result};
use wirebind_domain::value_objects::InvocationSite;
use wirebind_providers::{InMemorySymbolModel, ModelDocument};

/// Serialization format of a model document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Json,
    Yaml,
}

impl ModelFormat {
    /// Format implied by the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if extension == JSON_MODEL_EXTENSION {
            Ok(Self::Json)
        } else if YAML_MODEL_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Yaml)
        } else {
            Err(Error::invalid_argument(format!(
                "Unsupported model file '{}': expected a .json, .yaml or .yml extension",
                path.display()
            )))
        }
    }

    pub fn parse(self, text: &str) -> Result<ModelDocument> {
        match self {
            Self::Json => ModelDocument::from_json_str(text),
            Self::Yaml => ModelDocument::from_yaml_str(text),
        }
    }
}

/// A symbol model with the invocation sites to analyze
pub struct LoadedModel {
    pub model: InMemorySymbolModel,
    pub sites: Vec<InvocationSite>,
}

/// Read and parse a model document
pub fn read_model_document(path: &Path) -> Result<ModelDocument> {
    let format = ModelFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .io_context(format!("Failed to read model file {}", path.display()))?;
    format.parse(&text)
}

/// Read a model document and build the symbol model from it
pub fn load_model(path: &Path) -> Result<LoadedModel> {
    let (model, sites) = read_model_document(path)?.into_parts()?;
    tracing::debug!(
        path = %path.display(),
        types = model.len(),
        sites = sites.len(),
        "model loaded"
    );
    Ok(LoadedModel { model, sites })
}
