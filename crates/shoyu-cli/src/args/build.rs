//! Build action flags.

use std::time::Duration;

use clap::Args;

use shoyu_core::duration::parse_duration;
use shoyu_core::{parse_sub_config, BuildConfig, PushConfig, Result};

/// Options for `makisu build`.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Build-time variables (`KEY=VALUE`)
    #[arg(long = "build.build-args", env = "PARAMETER_BUILD_ARGS", value_delimiter = ',')]
    pub build_args: Vec<String>,

    /// Commit hash used for the cache id
    #[arg(long = "build.commit", env = "PARAMETER_COMMIT")]
    pub commit: Option<String>,

    /// Layer compression level
    #[arg(long = "build.compression", env = "PARAMETER_COMPRESSION", default_value = "default")]
    pub compression: String,

    /// Build context
    #[arg(long = "build.context", env = "PARAMETER_CONTEXT", default_value = ".")]
    pub context: String,

    /// Paths to leave out of the image
    #[arg(long = "build.deny-list", env = "PARAMETER_DENY_LIST", value_delimiter = ',')]
    pub deny_list: Vec<String>,

    /// Docker daemon options as JSON
    #[arg(long = "build.docker-options", env = "PARAMETER_DOCKER_OPTIONS")]
    pub docker_options: Option<String>,

    /// Where to write the image tarball
    #[arg(long = "build.destination", env = "PARAMETER_DESTINATION")]
    pub destination: Option<String>,

    /// Dockerfile to build
    #[arg(long = "build.file", env = "PARAMETER_FILE")]
    pub file: Option<String>,

    /// HTTP cache options as JSON
    #[arg(long = "build.http-cache-options", env = "PARAMETER_HTTP_CACHE_OPTIONS")]
    pub http_cache_options: Option<String>,

    /// Load the image into the docker daemon
    #[arg(long = "build.load", env = "PARAMETER_LOAD")]
    pub load: bool,

    /// Local cache lifetime (e.g. `168h`)
    #[arg(
        long = "build.local-cache-ttl",
        env = "PARAMETER_LOCAL_CACHE_TTL",
        value_parser = parse_duration
    )]
    pub local_cache_ttl: Option<Duration>,

    /// Let makisu modify the local filesystem
    #[arg(long = "build.modify-fs", env = "PARAMETER_MODIFY_FS")]
    pub modify_fs: bool,

    /// Keep the root filesystem intact between steps
    #[arg(
        long = "build.perserve-root",
        visible_alias = "build.preserve-root",
        env = "PARAMETER_PERSERVE_ROOT"
    )]
    pub preserve_root: bool,

    /// Registries to push the image to
    #[arg(long = "build.pushes", env = "PARAMETER_PUSHES", value_delimiter = ',')]
    pub pushes: Vec<String>,

    /// Redis cache options as JSON
    #[arg(
        long = "build.redis-cache-options",
        env = "PARAMETER_REDIS_CACHE_OPTIONS",
        hide_env_values = true
    )]
    pub redis_cache_options: Option<String>,

    /// Registry configuration file
    #[arg(long = "build.registry-config", env = "PARAMETER_REGISTRY_CONFIG")]
    pub registry_config: Option<String>,

    /// Additional names to push the image as
    #[arg(long = "build.replicas", env = "PARAMETER_REPLICAS", value_delimiter = ',')]
    pub replicas: Vec<String>,

    /// Storage directory for makisu
    #[arg(long = "build.storage", env = "PARAMETER_STORAGE")]
    pub storage: Option<String>,

    /// Image tag
    #[arg(long = "build.tag", env = "PARAMETER_TAG")]
    pub tag: Option<String>,

    /// Build stage to target
    #[arg(long = "build.target", env = "PARAMETER_TARGET")]
    pub target: Option<String>,
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn raw(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}

impl BuildArgs {
    /// Converts the flags into a build configuration.
    ///
    /// # Errors
    ///
    /// Returns a flag encoding error if one of the JSON options does not
    /// parse.
    pub fn to_config(&self) -> Result<BuildConfig> {
        Ok(BuildConfig {
            build_args: self.build_args.clone(),
            commit: text(self.commit.as_ref()),
            compression: self.compression.clone(),
            context: self.context.clone(),
            deny_list: self.deny_list.clone(),
            destination: text(self.destination.as_ref()),
            docker: parse_sub_config("build.docker-options", raw(self.docker_options.as_ref()))?,
            file: text(self.file.as_ref()),
            http_cache: parse_sub_config(
                "build.http-cache-options",
                raw(self.http_cache_options.as_ref()),
            )?,
            load: self.load,
            local_cache_ttl: self.local_cache_ttl.unwrap_or_default(),
            modify_fs: self.modify_fs,
            preserve_root: self.preserve_root,
            pushes: self.pushes.clone(),
            redis_cache: parse_sub_config(
                "build.redis-cache-options",
                raw(self.redis_cache_options.as_ref()),
            )?,
            registry_config: text(self.registry_config.as_ref()),
            replicas: self.replicas.clone(),
            storage: text(self.storage.as_ref()),
            tag: text(self.tag.as_ref()),
            target: text(self.target.as_ref()),
        })
    }
}

/// Derives the push configuration from a build.
///
/// The push publishes the build's destination tarball, or the context when
/// no destination is set.
#[must_use]
pub fn push_config(build: &BuildConfig) -> PushConfig {
    PushConfig {
        path: build.artifact_path().to_string(),
        pushes: build.pushes.clone(),
        replicas: build.replicas.clone(),
        registry_config: build.registry_config.clone(),
        tag: build.tag.clone(),
    }
}
