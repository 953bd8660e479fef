//! Complete makisu invocations.

use std::fmt;

use shoyu_core::{GlobalOptions, Result};

use crate::args::ArgVector;
use crate::builder::{global_args, Action, ActionArgs};

/// Location of the makisu binary inside the plugin image.
pub const MAKISU_BINARY: &str = "/makisu-internal/makisu";

/// A fully-formed makisu invocation.
///
/// The argument order is `<global flags> <action> <action args>`; the
/// program itself is kept separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    global: ArgVector,
    action: Action,
    args: ArgVector,
}

impl Invocation {
    /// Builds the invocation for `config` with the given global options.
    ///
    /// # Errors
    ///
    /// Returns a flag encoding error if the action's arguments cannot be
    /// built.
    pub fn new(
        program: impl Into<String>,
        global: &GlobalOptions,
        config: &impl ActionArgs,
    ) -> Result<Self> {
        Ok(Self {
            program: program.into(),
            global: global_args(global),
            action: config.action(),
            args: config.to_args()?,
        })
    }

    /// Returns the program to execute.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the action being invoked.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Returns the action-specific arguments.
    #[must_use]
    pub const fn action_args(&self) -> &ArgVector {
        &self.args
    }

    /// Returns the full argument list passed to the program.
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        let mut argv = self.global.clone();
        argv.positional(self.action.as_str());
        argv.extend(self.args.clone());
        argv.into_vec()
    }
}

/// Renders the command line for logs, with secret values hidden.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        if !self.global.is_empty() {
            write!(f, " {}", self.global)?;
        }
        write!(f, " {}", self.action)?;
        if !self.args.is_empty() {
            write!(f, " {}", self.args)?;
        }
        Ok(())
    }
}
