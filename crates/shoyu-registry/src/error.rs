//! Error types for registry configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing the registry auth file.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A template or the merged map could not be (de)serialized.
    #[error("Registry config serialization failed ({context}): {source}")]
    Serialization {
        /// What was being (de)serialized.
        context: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The auth file could not be written.
    #[error("File I/O error at {path}: {source}")]
    Io {
        /// Target path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    pub(crate) fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }
}
