//! The registry auth map makisu consumes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Per-repository settings, keyed by repository pattern (e.g. `.*`).
pub type RepositoryMap = BTreeMap<String, RepositoryConfig>;

/// Settings for the repositories matching one pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Transport security and credentials.
    pub security: SecurityConfig,
}

/// Security settings for a repository pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// TLS settings.
    pub tls: TlsConfig,
    /// Basic authentication credentials; empty for anonymous access.
    pub basic: BasicAuth,
}

/// TLS settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Client-side TLS settings.
    pub client: TlsClientConfig,
}

/// Client-side TLS settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsClientConfig {
    /// Disables TLS entirely.
    pub disabled: bool,
}

/// Basic authentication credentials.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    /// Username.
    pub username: String,
    /// Password or token.
    pub password: String,
}

impl BasicAuth {
    /// Returns `true` if no credentials are set.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Registry host to repository settings.
///
/// Keys are kept sorted so the serialized file is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergedAuthMap(BTreeMap<String, RepositoryMap>);

impl MergedAuthMap {
    /// Creates a map with a single host entry.
    #[must_use]
    pub fn single(host: impl Into<String>, repositories: RepositoryMap) -> Self {
        let mut map = BTreeMap::new();
        map.insert(host.into(), repositories);
        Self(map)
    }

    /// Overlays `other` onto this map.
    ///
    /// Each host in `other` replaces the existing entry for that host as a
    /// whole; repository patterns are not merged individually.
    pub fn overlay(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns the repository settings for `host`.
    #[must_use]
    pub fn get(&self, host: &str) -> Option<&RepositoryMap> {
        self.0.get(host)
    }

    /// Returns the configured hosts in order.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of hosts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no hosts are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the map to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<Vec<u8>, RegistryError> {
        serde_json::to_vec(self).map_err(|e| RegistryError::serialization("auth map", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repositories(username: &str) -> RepositoryMap {
        let mut map = RepositoryMap::new();
        map.insert(
            ".*".to_string(),
            RepositoryConfig {
                security: SecurityConfig {
                    basic: BasicAuth {
                        username: username.to_string(),
                        password: String::new(),
                    },
                    ..SecurityConfig::default()
                },
            },
        );
        map
    }

    #[test]
    fn test_overlay_replaces_whole_host_entry() {
        let mut base = MergedAuthMap::single("a.example.com", repositories(""));
        base.overlay(MergedAuthMap::single("b.example.com", repositories("")));
        base.overlay(MergedAuthMap::single("a.example.com", repositories("bob")));

        assert_eq!(base.len(), 2);
        let a = base.get("a.example.com").unwrap();
        assert_eq!(a[".*"].security.basic.username, "bob");
    }

    #[test]
    fn test_hosts_are_sorted() {
        let mut map = MergedAuthMap::single("zeta.example.com", repositories(""));
        map.overlay(MergedAuthMap::single("alpha.example.com", repositories("")));

        let hosts: Vec<_> = map.hosts().collect();
        assert_eq!(hosts, ["alpha.example.com", "zeta.example.com"]);
    }

    #[test]
    fn test_to_json_shape() {
        let map = MergedAuthMap::single("index.docker.io", repositories(""));
        let json = String::from_utf8(map.to_json().unwrap()).unwrap();

        assert_eq!(
            json,
            r#"{"index.docker.io":{".*":{"security":{"tls":{"client":{"disabled":false}},"basic":{"username":"","password":""}}}}}"#
        );
    }

    #[test]
    fn test_basic_auth_debug_redacts_password() {
        let basic = BasicAuth {
            username: "octocat".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{basic:?}");
        assert!(debug.contains("octocat"));
        assert!(!debug.contains("hunter2"));
        assert!(!basic.is_anonymous());
        assert!(BasicAuth::default().is_anonymous());
    }
}
