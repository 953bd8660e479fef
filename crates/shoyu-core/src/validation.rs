//! Structural validation for configuration records.
//!
//! Validation only checks that required fields are present. It never looks
//! at other fields or at the outside world, and it stops at the first
//! missing field instead of collecting every violation.

use std::fmt;

use tracing::trace;

use crate::build::BuildConfig;
use crate::push::PushConfig;
use crate::registry::RegistryCredential;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A human-readable description of the failure.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for a required field that is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoyu_core::ValidationError;
    ///
    /// let error = ValidationError::required("tag");
    /// assert_eq!(error.field, "tag");
    /// assert!(error.to_string().starts_with("validation error for 'tag'"));
    /// ```
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            message: format!("'{field}' is required but was not provided"),
            field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Trait for configuration records that can be checked before use.
pub trait Validate {
    /// Validates this instance.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Returns true if this instance is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Fails with a required-field error when `value` is empty.
fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::required(field))
    } else {
        Ok(())
    }
}

impl Validate for BuildConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        trace!("validating build configuration");

        require("context", &self.context)?;
        require("tag", &self.tag)
    }
}

impl Validate for PushConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        trace!("validating push configuration");

        require("path", &self.path)?;
        require("tag", &self.tag)
    }
}

impl Validate for RegistryCredential {
    fn validate(&self) -> Result<(), ValidationError> {
        trace!(dry_run = self.dry_run, "validating registry credential");

        require("host", &self.host)?;

        // credentials are only needed when something is actually published
        if self.dry_run {
            return Ok(());
        }

        require("username", &self.username)?;
        require("password", &self.password)
    }
}
