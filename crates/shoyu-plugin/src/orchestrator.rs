//! Build-then-push sequencing.
//!
//! A run validates the registry credential and build configuration, writes
//! the registry auth file, runs `makisu build`, and then runs `makisu push`
//! unless there is nothing to publish. The first failure ends the run; steps
//! that already completed are not undone.

use std::fmt;
use std::path::{Path, PathBuf};

use shoyu_command::{Invocation, MAKISU_BINARY};
use shoyu_core::{BuildConfig, GlobalOptions, PushConfig, RegistryCredential, Validate};
use shoyu_registry::{AuthFile, FileWriter, DEFAULT_AUTH_PATH};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::runner::ProcessRunner;

/// Progress of an orchestrator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    /// Checking configuration and writing the auth file.
    #[default]
    Validating,

    /// Running `makisu build`.
    Building,

    /// Running `makisu push`.
    Pushing,

    /// The run finished successfully.
    Done,

    /// The run stopped at an error.
    Failed,
}

impl Stage {
    /// Returns a string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Building => "building",
            Self::Pushing => "pushing",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs makisu build and push with a generated registry auth file.
///
/// The file writer and process runner are supplied by the caller, so tests
/// can run the whole sequence without touching the filesystem or spawning
/// processes.
#[derive(Debug)]
pub struct Orchestrator<W, R> {
    writer: W,
    runner: R,
    program: String,
    auth_path: PathBuf,
    global: GlobalOptions,
    stage: Stage,
}

impl<W: FileWriter, R: ProcessRunner> Orchestrator<W, R> {
    /// Creates an orchestrator using the default makisu binary and auth
    /// file location.
    pub fn new(writer: W, runner: R) -> Self {
        Self {
            writer,
            runner,
            program: MAKISU_BINARY.to_string(),
            auth_path: PathBuf::from(DEFAULT_AUTH_PATH),
            global: GlobalOptions::default(),
            stage: Stage::default(),
        }
    }

    /// Sets the makisu program to execute.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Sets where the registry auth file is written.
    #[must_use]
    pub fn with_auth_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.auth_path = path.into();
        self
    }

    /// Sets the global options passed to every action.
    #[must_use]
    pub fn with_global(mut self, global: GlobalOptions) -> Self {
        self.global = global;
        self
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the registry auth file location.
    #[must_use]
    pub fn auth_path(&self) -> &Path {
        &self.auth_path
    }

    /// Runs the full sequence.
    ///
    /// The push phase is skipped when the credential is in dry-run mode or
    /// the push configuration names no targets. An empty push path is taken
    /// from the build's destination, or its context when there is none.
    ///
    /// # Errors
    ///
    /// Returns the first validation, encoding, auth file, or process error.
    /// The stage is left at [`Stage::Failed`].
    pub fn run(
        &mut self,
        registry: &RegistryCredential,
        build: &BuildConfig,
        push: &PushConfig,
    ) -> Result<()> {
        self.stage = Stage::Validating;

        match self.execute(registry, build, push) {
            Ok(()) => {
                self.stage = Stage::Done;
                info!("makisu plugin finished");
                Ok(())
            }
            Err(err) => {
                warn!(stage = %self.stage, error = %err, "makisu plugin failed");
                self.stage = Stage::Failed;
                Err(err)
            }
        }
    }

    fn execute(
        &mut self,
        registry: &RegistryCredential,
        build: &BuildConfig,
        push: &PushConfig,
    ) -> Result<()> {
        debug!(?registry, "validating configuration");
        registry.validate()?;
        build.validate()?;

        AuthFile::new(self.auth_path.clone(), &self.writer).write(registry)?;
        let registry_config = self.auth_path.display().to_string();

        let build = BuildConfig {
            registry_config: registry_config.clone(),
            ..build.clone()
        };
        let invocation = Invocation::new(self.program.as_str(), &self.global, &build)?;

        self.stage = Stage::Building;
        self.runner.run(&invocation)?;

        if registry.dry_run {
            info!("dry run enabled, skipping push");
            return Ok(());
        }
        if push.has_no_targets() {
            info!("no push targets configured, skipping push");
            return Ok(());
        }

        let mut push = push.clone();
        if push.path.is_empty() {
            push.path = build.artifact_path().to_string();
        }
        push.validate()?;
        push.registry_config = registry_config;

        let invocation = Invocation::new(self.program.as_str(), &self.global, &push)?;

        self.stage = Stage::Pushing;
        self.runner.run(&invocation)
    }
}

#[cfg(test)]
mod tests {
    use shoyu_registry::MemoryFileWriter;

    use super::*;
    use crate::runner::RecordingRunner;

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Validating.to_string(), "validating");
        assert_eq!(Stage::Done.as_str(), "done");
        assert_eq!(Stage::Failed.to_string(), "failed");
    }

    #[test]
    fn test_defaults() {
        let orchestrator = Orchestrator::new(MemoryFileWriter::new(), RecordingRunner::new());
        assert_eq!(orchestrator.stage(), Stage::Validating);
        assert_eq!(orchestrator.auth_path(), Path::new(DEFAULT_AUTH_PATH));
    }

    #[test]
    fn test_build_gets_auth_path() {
        let writer = MemoryFileWriter::new();
        let runner = RecordingRunner::new();
        let mut orchestrator = Orchestrator::new(&writer, &runner).with_auth_path("/tmp/auth.json");

        let registry = RegistryCredential::new("registry.example.com", "root", "toor")
            .with_dry_run(true);
        orchestrator
            .run(&registry, &BuildConfig::new(".", "latest"), &PushConfig::default())
            .unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(
            invocations[0].action_args().values_of("--registry-config"),
            vec!["/tmp/auth.json"]
        );
        assert!(writer.get("/tmp/auth.json").is_some());
    }

    fn push_path_for(build: &BuildConfig) -> String {
        let runner = RecordingRunner::new();
        let mut orchestrator = Orchestrator::new(MemoryFileWriter::new(), &runner);
        let push = PushConfig {
            pushes: build.pushes.clone(),
            tag: build.tag.clone(),
            ..PushConfig::default()
        };

        let registry = RegistryCredential::new("registry.example.com", "root", "toor");
        orchestrator.run(&registry, build, &push).unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 2);
        invocations[1].action_args().as_slice().last().cloned().unwrap()
    }

    #[test]
    fn test_push_path_defaults_to_destination() {
        let build = BuildConfig {
            destination: "/tmp/image.tar".to_string(),
            pushes: vec!["registry.example.com/app:latest".to_string()],
            ..BuildConfig::new(".", "latest")
        };
        assert_eq!(push_path_for(&build), "/tmp/image.tar");
    }

    #[test]
    fn test_push_path_falls_back_to_context() {
        let build = BuildConfig {
            pushes: vec!["registry.example.com/app:latest".to_string()],
            ..BuildConfig::new("app", "latest")
        };
        assert_eq!(push_path_for(&build), "app");
    }
}
