//! Fixed per-host fragments.
//!
//! Fragments are parsed from constant JSON and only then filled with the
//! host and credentials, so user-supplied values are never spliced into
//! JSON text.

use crate::auth::{BasicAuth, MergedAuthMap, RepositoryMap};
use crate::error::RegistryError;

/// Repository pattern that matches every repository on a host.
pub const REPOSITORY_PATTERN: &str = ".*";

const REPOSITORY_TEMPLATE: &str = r#"{
  ".*": {
    "security": {
      "tls": { "client": { "disabled": false } },
      "basic": { "username": "", "password": "" }
    }
  }
}"#;

fn repository_template() -> Result<RepositoryMap, RegistryError> {
    serde_json::from_str(REPOSITORY_TEMPLATE)
        .map_err(|e| RegistryError::serialization("repository template", e))
}

/// Fragment granting anonymous access to `host`.
pub(crate) fn anonymous(host: &str) -> Result<MergedAuthMap, RegistryError> {
    Ok(MergedAuthMap::single(host, repository_template()?))
}

/// Fragment authenticating against `host` with basic credentials.
pub(crate) fn authenticated(
    host: &str,
    username: &str,
    password: &str,
) -> Result<MergedAuthMap, RegistryError> {
    let mut repositories = repository_template()?;
    for repository in repositories.values_mut() {
        repository.security.basic = BasicAuth {
            username: username.to_string(),
            password: password.to_string(),
        };
    }
    Ok(MergedAuthMap::single(host, repositories))
}
