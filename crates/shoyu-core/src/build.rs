//! Build action configuration.
//!
//! The field set mirrors makisu's `build` command. Empty strings, empty
//! lists, `false` and zero durations all mean "not set".

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::duration::DurationValue;

/// Options for the `build` action.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Build-time arguments for the Dockerfile (`KEY=value`).
    pub build_args: Vec<String>,
    /// Commit used for `#!COMMIT` annotations.
    pub commit: String,
    /// Image compression level: `no`, `speed`, `size` or `default`.
    pub compression: String,
    /// Build context directory (required).
    pub context: String,
    /// Paths ignored inside the image.
    pub deny_list: Vec<String>,
    /// Output path of the image tarball.
    pub destination: String,
    /// Docker daemon settings used when loading the image.
    pub docker: Option<DockerDaemonConfig>,
    /// Path to the Dockerfile.
    pub file: String,
    /// HTTP layer cache settings.
    pub http_cache: Option<HttpCacheConfig>,
    /// Load the image into the Docker daemon after the build.
    pub load: bool,
    /// Time to live for the local layer cache.
    pub local_cache_ttl: Duration,
    /// Allow the builder to modify files outside its storage directories.
    pub modify_fs: bool,
    /// Copy storage from root during and after the build.
    pub preserve_root: bool,
    /// Registries to push the image to.
    pub pushes: Vec<String>,
    /// Redis layer cache settings.
    pub redis_cache: Option<RedisCacheConfig>,
    /// Path of the registry authentication file.
    pub registry_config: String,
    /// Alternative full image names (`<registry>/<repo>:<tag>`).
    pub replicas: Vec<String>,
    /// Directory for temporary files and cached layers.
    pub storage: String,
    /// Image tag (required).
    pub tag: String,
    /// Target build stage.
    pub target: String,
}

impl BuildConfig {
    /// Creates a build configuration with only the required fields set.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoyu_core::BuildConfig;
    ///
    /// let build = BuildConfig::new(".", "latest");
    /// assert_eq!(build.context, ".");
    /// assert!(build.build_args.is_empty());
    /// ```
    #[must_use]
    pub fn new(context: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Returns where the built image ends up.
    ///
    /// This is the destination tarball when one is set, otherwise the build
    /// context.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoyu_core::BuildConfig;
    ///
    /// let mut build = BuildConfig::new(".", "latest");
    /// assert_eq!(build.artifact_path(), ".");
    ///
    /// build.destination = "/tmp/image.tar".to_string();
    /// assert_eq!(build.artifact_path(), "/tmp/image.tar");
    /// ```
    #[must_use]
    pub fn artifact_path(&self) -> &str {
        if self.destination.is_empty() {
            &self.context
        } else {
            &self.destination
        }
    }
}

/// `--docker-*` options of the build action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerDaemonConfig {
    /// Docker host used to load images into the daemon.
    pub host: String,
    /// Scheme for API calls to the daemon (makisu defaults to `http`).
    pub scheme: String,
    /// Docker API version.
    pub version: String,
}

/// `--http-cache-*` options of the build action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpCacheConfig {
    /// Address of the HTTP server mapping cache IDs to layer digests.
    pub addr: String,
    /// Request headers sent to the cache server.
    pub headers: Vec<String>,
}

/// `--redis-cache-*` options of the build action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisCacheConfig {
    /// Address of the Redis server mapping cache IDs to layer digests.
    pub addr: String,
    /// Redis password; must match `requirepass` in `redis.conf`.
    pub password: String,
    /// Time to live for cache entries.
    pub ttl: Option<DurationValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_new_sets_required_fields_only() {
        let build = BuildConfig::new(".", "latest");
        assert_eq!(build.tag, "latest");
        assert!(build.docker.is_none());
        assert_eq!(build.local_cache_ttl, Duration::ZERO);
        assert!(!build.load);
    }

    #[test]
    fn test_artifact_path_prefers_destination() {
        let mut build = BuildConfig::new("app", "latest");
        assert_eq!(build.artifact_path(), "app");

        build.destination = "/out/app.tar".to_string();
        assert_eq!(build.artifact_path(), "/out/app.tar");
    }

    #[test]
    fn test_docker_config_partial_json() {
        let docker: DockerDaemonConfig =
            serde_json::from_str(r#"{"host": "unix:///var/run/docker.sock"}"#).unwrap();
        assert_eq!(docker.host, "unix:///var/run/docker.sock");
        assert!(docker.scheme.is_empty());
    }

    #[test]
    fn test_redis_config_json_ttl_string() {
        let redis: RedisCacheConfig = serde_json::from_str(
            r#"{"addr": "localhost:6379", "password": "superSecret123", "ttl": "1m0s"}"#,
        )
        .unwrap();
        assert_eq!(redis.ttl, Some(DurationValue::Text("1m0s".to_string())));
    }

    #[test]
    fn test_http_cache_headers_json() {
        let cache: HttpCacheConfig = serde_json::from_str(
            r#"{"addr": "http://localhost", "headers": ["Content-type: Application/json"]}"#,
        )
        .unwrap();
        assert_eq!(cache.headers, vec!["Content-type: Application/json"]);
    }
}
