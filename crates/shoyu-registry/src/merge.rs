//! Merging fragments and writing the auth file.

use std::path::{Path, PathBuf};

use shoyu_core::{RegistryCredential, DEFAULT_REGISTRY};
use tracing::{debug, info};

use crate::auth::MergedAuthMap;
use crate::error::RegistryError;
use crate::templates;
use crate::writer::FileWriter;

/// Where makisu expects the auth file inside the plugin image.
pub const DEFAULT_AUTH_PATH: &str = "/makisu/registry/config.json";

/// Permission mode of the auth file.
pub const AUTH_FILE_MODE: u32 = 0o644;

/// Builds the auth map for `credential`.
///
/// Fragments are applied in order: public registry, mirror (if any), then
/// the target registry with credentials. A later fragment for the same host
/// replaces the earlier one.
///
/// # Errors
///
/// Returns [`RegistryError::Serialization`] if a template cannot be parsed.
///
/// # Examples
///
/// ```
/// use shoyu_core::RegistryCredential;
/// use shoyu_registry::merge_auth_config;
///
/// let credential = RegistryCredential::new("index.docker.io", "octocat", "hunter2");
/// let merged = merge_auth_config(&credential)?;
///
/// // the credentialed fragment replaces the anonymous public one
/// assert_eq!(merged.len(), 1);
/// # Ok::<(), shoyu_registry::RegistryError>(())
/// ```
pub fn merge_auth_config(credential: &RegistryCredential) -> Result<MergedAuthMap, RegistryError> {
    let mut merged = templates::anonymous(DEFAULT_REGISTRY)?;

    if let Some(mirror) = credential.mirror() {
        debug!(mirror, "adding anonymous mirror entry");
        merged.overlay(templates::anonymous(mirror)?);
    }

    merged.overlay(templates::authenticated(
        &credential.host,
        &credential.username,
        &credential.password,
    )?);

    Ok(merged)
}

/// The auth file makisu reads via `--registry-config`.
#[derive(Debug, Clone)]
pub struct AuthFile<W> {
    path: PathBuf,
    writer: W,
}

impl<W: FileWriter> AuthFile<W> {
    /// Creates an auth file at `path` written through `writer`.
    pub fn new(path: impl Into<PathBuf>, writer: W) -> Self {
        Self {
            path: path.into(),
            writer,
        }
    }

    /// Returns the file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merges the fragments for `credential` and writes the result.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write(&self, credential: &RegistryCredential) -> Result<(), RegistryError> {
        let merged = merge_auth_config(credential)?;
        let json = merged.to_json()?;

        self.writer
            .write_file(&self.path, &json, AUTH_FILE_MODE)
            .map_err(|e| RegistryError::Io {
                path: self.path.clone(),
                source: e,
            })?;

        info!(
            path = %self.path.display(),
            hosts = merged.len(),
            "wrote registry auth file"
        );
        Ok(())
    }
}

impl Default for AuthFile<crate::writer::OsFileWriter> {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_PATH, crate::writer::OsFileWriter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::REPOSITORY_PATTERN;
    use crate::writer::{MemoryFileWriter, OsFileWriter};

    #[test]
    fn test_merge_without_mirror() {
        let credential = RegistryCredential::new("registry.example.com", "root", "toor");
        let merged = merge_auth_config(&credential).unwrap();

        let hosts: Vec<_> = merged.hosts().collect();
        assert_eq!(hosts, ["index.docker.io", "registry.example.com"]);

        let public = &merged.get(DEFAULT_REGISTRY).unwrap()[REPOSITORY_PATTERN];
        assert!(public.security.basic.is_anonymous());

        let target = &merged.get("registry.example.com").unwrap()[REPOSITORY_PATTERN];
        assert_eq!(target.security.basic.username, "root");
        assert_eq!(target.security.basic.password, "toor");
        assert!(!target.security.tls.client.disabled);
    }

    #[test]
    fn test_merge_with_mirror() {
        let credential = RegistryCredential::new("registry.example.com", "root", "toor")
            .with_mirror("mirror.example.com");
        let merged = merge_auth_config(&credential).unwrap();

        assert_eq!(merged.len(), 3);
        let mirror = &merged.get("mirror.example.com").unwrap()[REPOSITORY_PATTERN];
        assert!(mirror.security.basic.is_anonymous());
        assert!(!mirror.security.tls.client.disabled);
    }

    #[test]
    fn test_registry_overrides_mirror_with_same_host() {
        let credential = RegistryCredential::new("mirror.example.com", "root", "toor")
            .with_mirror("mirror.example.com");
        let merged = merge_auth_config(&credential).unwrap();

        assert_eq!(merged.len(), 2);
        let entry = &merged.get("mirror.example.com").unwrap()[REPOSITORY_PATTERN];
        assert_eq!(entry.security.basic.username, "root");
    }

    #[test]
    fn test_registry_overrides_public_default() {
        let credential = RegistryCredential::new(DEFAULT_REGISTRY, "root", "toor");
        let merged = merge_auth_config(&credential).unwrap();

        assert_eq!(merged.len(), 1);
        let entry = &merged.get(DEFAULT_REGISTRY).unwrap()[REPOSITORY_PATTERN];
        assert_eq!(entry.security.basic.password, "toor");
    }

    #[test]
    fn test_write_to_memory() {
        let writer = MemoryFileWriter::new();
        let file = AuthFile::new(DEFAULT_AUTH_PATH, &writer);
        let credential = RegistryCredential::new("registry.example.com", "root", "toor");

        file.write(&credential).unwrap();

        let written = writer.get(DEFAULT_AUTH_PATH).unwrap();
        assert_eq!(written.mode, AUTH_FILE_MODE);

        let parsed: serde_json::Value = serde_json::from_slice(&written.contents).unwrap();
        assert_eq!(
            parsed["registry.example.com"][".*"]["security"]["basic"]["username"],
            "root"
        );
        assert_eq!(
            parsed["index.docker.io"][".*"]["security"]["tls"]["client"]["disabled"],
            false
        );
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("makisu/registry/config.json");
        let file = AuthFile::new(&path, OsFileWriter);

        file.write(&RegistryCredential::new("registry.example.com", "root", "toor"))
            .unwrap();

        let merged: MergedAuthMap = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(merged.len(), 2);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, AUTH_FILE_MODE);
        }
    }

    #[test]
    fn test_write_failure_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();

        // a regular file where a directory is expected
        let path = blocker.join("config.json");
        let file = AuthFile::new(&path, OsFileWriter);

        let err = file
            .write(&RegistryCredential::new("registry.example.com", "root", "toor"))
            .unwrap_err();
        match err {
            RegistryError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_auth_file_path() {
        let file = AuthFile::default();
        assert_eq!(file.path(), Path::new(DEFAULT_AUTH_PATH));
    }
}
