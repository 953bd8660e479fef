//! Error types for the plugin crate.

use shoyu_command::Action;
use shoyu_registry::RegistryError;
use thiserror::Error;

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, PluginError>;

/// Errors that abort a plugin run.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Configuration was invalid or could not be encoded as flags.
    #[error(transparent)]
    Core(#[from] shoyu_core::Error),

    /// The registry auth file could not be produced.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The makisu process could not be started.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The makisu process exited unsuccessfully.
    #[error("makisu {action} failed: {status}")]
    Failed {
        /// Action that failed.
        action: Action,
        /// Exit status as reported by the operating system.
        status: String,
    },
}

impl From<shoyu_core::ValidationError> for PluginError {
    fn from(err: shoyu_core::ValidationError) -> Self {
        Self::Core(err.into())
    }
}

#[cfg(test)]
mod tests {
    use shoyu_core::ValidationError;

    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let err: PluginError = ValidationError::required("tag").into();
        assert!(matches!(err, PluginError::Core(_)));
        assert_eq!(err.to_string(), ValidationError::required("tag").to_string());
    }

    #[test]
    fn test_failed_display() {
        let err = PluginError::Failed {
            action: Action::Push,
            status: "exit status: 1".to_string(),
        };
        assert_eq!(err.to_string(), "makisu push failed: exit status: 1");
    }
}
