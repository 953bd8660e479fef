//! Process runners that execute makisu invocations.

use std::process::Command;

use parking_lot::Mutex;
use shoyu_command::{Action, Invocation};
use tracing::{debug, info};

use crate::error::{PluginError, Result};

/// Executes a makisu invocation and waits for it to exit.
pub trait ProcessRunner {
    /// Runs `invocation` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::Spawn`] if the process cannot be started and
    /// [`PluginError::Failed`] if it exits unsuccessfully.
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        (**self).run(invocation)
    }
}

/// Runs invocations as child processes.
///
/// The child inherits this process's standard streams; only the exit status
/// is inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        info!(command = %invocation, "running makisu {}", invocation.action());

        let status = Command::new(invocation.program())
            .args(invocation.argv())
            .status()
            .map_err(|e| PluginError::Spawn {
                program: invocation.program().to_string(),
                source: e,
            })?;

        debug!(%status, action = %invocation.action(), "makisu exited");

        if status.success() {
            Ok(())
        } else {
            Err(PluginError::Failed {
                action: invocation.action(),
                status: status.to_string(),
            })
        }
    }
}

/// Records invocations instead of running them.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: Mutex<Vec<Invocation>>,
    fail_on: Option<Action>,
}

impl RecordingRunner {
    /// Creates a runner where every invocation succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes invocations of `action` fail with exit status 1.
    #[must_use]
    pub const fn failing_on(mut self, action: Action) -> Self {
        self.fail_on = Some(action);
        self
    }

    /// Returns the recorded invocations in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().clone()
    }

    /// Returns the number of recorded invocations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.invocations.lock().len()
    }

    /// Returns `true` if nothing was run.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invocations.lock().is_empty()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        self.invocations.lock().push(invocation.clone());

        if self.fail_on == Some(invocation.action()) {
            return Err(PluginError::Failed {
                action: invocation.action(),
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
