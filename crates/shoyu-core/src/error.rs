//! Error types for shoyu core operations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while checking or encoding configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration field is missing.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A field could not be turned into a builder flag.
    ///
    /// Raised for malformed duration strings and for raw JSON sub-configs
    /// that do not parse.
    #[error("failed to encode '{field}': {reason}")]
    FlagEncoding {
        /// Field that failed to encode (e.g. `redis_cache.ttl`).
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl Error {
    /// Creates a flag encoding error for the given field.
    pub fn flag_encoding(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::FlagEncoding {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the name of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Validation(err) => &err.field,
            Self::FlagEncoding { field, .. } => field,
        }
    }
}
