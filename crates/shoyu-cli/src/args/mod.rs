//! Command-line flags and plugin execution.

pub mod build;
pub mod registry;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use shoyu_command::MAKISU_BINARY;
use shoyu_core::{GlobalOptions, RegistryCredential};
use shoyu_plugin::{Orchestrator, SystemRunner};
use shoyu_registry::{OsFileWriter, DEFAULT_AUTH_PATH};

use build::{push_config, BuildArgs};
use registry::RegistryArgs;

/// Shoyu - builds and publishes container images with makisu
#[derive(Parser, Debug)]
#[command(name = "shoyu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub build: BuildArgs,

    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Global makisu options as JSON
    #[arg(long = "global.flags", env = "PARAMETER_GLOBAL_FLAGS")]
    pub global_flags: Option<String>,

    /// Log level (trace|debug|info|warn|error|fatal|panic)
    #[arg(long = "log.level", env = "PARAMETER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// makisu binary to run
    #[arg(
        long = "makisu.binary",
        env = "PARAMETER_MAKISU_BINARY",
        default_value = MAKISU_BINARY,
        hide = true
    )]
    pub program: String,
}

impl Cli {
    /// Returns the global makisu options.
    ///
    /// # Errors
    ///
    /// Returns an error if `global.flags` is not valid JSON.
    pub fn global_options(&self) -> Result<GlobalOptions> {
        let raw = self.global_flags.as_deref().unwrap_or_default();
        GlobalOptions::from_raw(raw).context("Failed to parse global flags")
    }

    /// Runs makisu build and push.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, the auth file cannot be
    /// written, or makisu fails.
    pub fn run(&self) -> Result<()> {
        let build = self
            .build
            .to_config()
            .context("Failed to parse build options")?;
        let push = push_config(&build);
        let registry = RegistryCredential::from(&self.registry);
        let global = self.global_options()?;

        debug!(?registry, ?global, "resolved plugin configuration");

        let mut orchestrator = Orchestrator::new(OsFileWriter, SystemRunner)
            .with_program(&self.program)
            .with_auth_path(DEFAULT_AUTH_PATH)
            .with_global(global);

        orchestrator.run(&registry, &build, &push)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shoyu").chain(args.iter().copied()))
            .expect("flags should parse")
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--build.tag", "latest"]);
        let build = cli.build.to_config().unwrap();

        assert_eq!(build.context, ".");
        assert_eq!(build.compression, "default");
        assert_eq!(build.tag, "latest");
        assert_eq!(build.local_cache_ttl, Duration::ZERO);
        assert!(build.docker.is_none());
        assert!(build.redis_cache.is_none());

        assert_eq!(cli.registry.name, "index.docker.io");
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.program, MAKISU_BINARY);
        assert_eq!(cli.global_options().unwrap(), GlobalOptions::default());
    }

    #[test]
    #[rustfmt::skip]
    fn test_build_flags() {
        let cli = parse(&[
            "--build.tag", "latest",
            "--build.build-args", "FOO=bar",
            "--build.build-args", "BAZ=qux",
            "--build.pushes", "a.example.com/app,b.example.com/app",
            "--build.destination", "/tmp/image.tar",
            "--build.local-cache-ttl", "168h",
            "--build.load",
            "--build.perserve-root",
            "--build.docker-options", r#"{"host": "unix:///var/run/docker.sock"}"#,
            "--build.redis-cache-options", r#"{"addr": "redis:6379", "ttl": "1m"}"#,
        ]);
        let build = cli.build.to_config().unwrap();

        assert_eq!(build.build_args, ["FOO=bar", "BAZ=qux"]);
        assert_eq!(build.pushes, ["a.example.com/app", "b.example.com/app"]);
        assert_eq!(build.local_cache_ttl, Duration::from_secs(168 * 3600));
        assert!(build.load);
        assert!(!build.modify_fs);
        assert!(build.preserve_root);
        assert_eq!(build.docker.unwrap().host, "unix:///var/run/docker.sock");
        assert_eq!(build.redis_cache.unwrap().addr, "redis:6379");

        let push = push_config(&cli.build.to_config().unwrap());
        assert_eq!(push.path, "/tmp/image.tar");
        assert_eq!(push.pushes.len(), 2);
        assert_eq!(push.tag, "latest");
    }

    #[test]
    fn test_preserve_root_spellings() {
        assert!(parse(&["--build.perserve-root"]).build.preserve_root);
        assert!(parse(&["--build.preserve-root"]).build.preserve_root);
    }

    #[test]
    fn test_preserve_root_from_env() {
        std::env::set_var("PARAMETER_PERSERVE_ROOT", "true");
        let cli = Cli::try_parse_from(["shoyu", "--build.tag", "latest"]);
        std::env::remove_var("PARAMETER_PERSERVE_ROOT");

        assert!(cli.unwrap().build.preserve_root);
    }

    #[test]
    fn test_push_path_falls_back_to_context() {
        let cli = parse(&["--build.tag", "latest", "--build.pushes", "FOO"]);
        let push = push_config(&cli.build.to_config().unwrap());

        assert_eq!(push.path, ".");
        assert_eq!(push.pushes, ["FOO"]);
    }

    #[test]
    fn test_bad_duration_is_rejected() {
        let result = Cli::try_parse_from(["shoyu", "--build.local-cache-ttl", "a week"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_sub_config_names_flag() {
        let cli = parse(&["--build.http-cache-options", "{not json"]);
        let err = cli.build.to_config().unwrap_err();
        assert_eq!(err.field(), "build.http-cache-options");
    }

    #[test]
    fn test_global_flags_override() {
        let cli = parse(&["--global.flags", r#"{"log": {"level": "debug"}}"#]);
        let global = cli.global_options().unwrap();

        assert_eq!(global.log.level, "debug");
        assert!(global.log.fmt.is_empty());
    }

    #[test]
    fn test_bad_global_flags() {
        let cli = parse(&["--global.flags", "["]);
        assert!(cli.global_options().is_err());
    }

    #[test]
    #[rustfmt::skip]
    fn test_registry_credential() {
        let cli = parse(&[
            "--registry.name", "registry.example.com",
            "--registry.mirror", "mirror.example.com",
            "--registry.username", "octocat",
            "--registry.password", "hunter2",
            "--registry.dry-run",
        ]);
        let registry = RegistryCredential::from(&cli.registry);

        assert_eq!(registry.host, "registry.example.com");
        assert_eq!(registry.mirror(), Some("mirror.example.com"));
        assert_eq!(registry.username, "octocat");
        assert_eq!(registry.password, "hunter2");
        assert!(registry.dry_run);
    }
}
