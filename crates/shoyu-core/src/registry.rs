//! Registry credential supplied to the plugin.

use std::fmt;

/// Public registry that is always reachable anonymously.
pub const DEFAULT_REGISTRY: &str = "index.docker.io";

/// The registry the image is published to.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistryCredential {
    /// Registry host (e.g. `index.docker.io`).
    pub host: String,
    /// Optional mirror host used for anonymous pulls.
    pub mirror: String,
    /// Username for the registry.
    pub username: String,
    /// Password or token for the registry.
    pub password: String,
    /// Build without publishing.
    pub dry_run: bool,
}

impl RegistryCredential {
    /// Creates a credential for a non-dry-run publish.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoyu_core::RegistryCredential;
    ///
    /// let registry = RegistryCredential::new("index.docker.io", "octocat", "hunter2")
    ///     .with_mirror("mirror.example.com");
    /// assert_eq!(registry.mirror, "mirror.example.com");
    /// assert!(!registry.dry_run);
    /// ```
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Sets the mirror host.
    #[must_use]
    pub fn with_mirror(mut self, mirror: impl Into<String>) -> Self {
        self.mirror = mirror.into();
        self
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the mirror host, if one is configured.
    #[must_use]
    pub fn mirror(&self) -> Option<&str> {
        if self.mirror.is_empty() {
            None
        } else {
            Some(&self.mirror)
        }
    }
}

// The password must never end up in logs.
impl fmt::Debug for RegistryCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCredential")
            .field("host", &self.host)
            .field("mirror", &self.mirror)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("dry_run", &self.dry_run)
            .finish()
    }
}
