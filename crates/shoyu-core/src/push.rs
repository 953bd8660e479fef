//! Push action configuration.

/// Options for the `push` action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushConfig {
    /// Location of the built image tarball (required).
    pub path: String,
    /// Registries to push the image to.
    pub pushes: Vec<String>,
    /// Alternative full image names (`<registry>/<repo>:<tag>`).
    pub replicas: Vec<String>,
    /// Path of the registry authentication file.
    pub registry_config: String,
    /// Image tag (required).
    pub tag: String,
}

impl PushConfig {
    /// Creates a push configuration with only the required fields set.
    #[must_use]
    pub fn new(path: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Returns true when there is no registry to push to.
    ///
    /// An empty target list is handled like a dry run: the push action is
    /// skipped rather than rejected.
    #[must_use]
    pub fn has_no_targets(&self) -> bool {
        self.pushes.is_empty()
    }
}
