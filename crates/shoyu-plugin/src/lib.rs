//! # Shoyu Plugin
//!
//! Runs makisu for a pipeline step: validate, write the registry auth file,
//! build, then push.
//!
//! ```text
//! Validating ──▶ Building ──▶ Pushing ──▶ Done
//!     │              │   └──(dry run)──────▲
//!     └──────────────┴──────────┴──▶ Failed
//! ```
//!
//! Both side effects are capabilities passed in by the caller: a
//! [`FileWriter`](shoyu_registry::FileWriter) for the auth file and a
//! [`ProcessRunner`] for makisu itself.
//!
//! ## Example
//!
//! ```rust
//! use shoyu_core::{BuildConfig, PushConfig, RegistryCredential};
//! use shoyu_plugin::{Orchestrator, RecordingRunner, Stage};
//! use shoyu_registry::MemoryFileWriter;
//!
//! let runner = RecordingRunner::new();
//! let mut orchestrator = Orchestrator::new(MemoryFileWriter::new(), &runner);
//!
//! let registry = RegistryCredential::new("index.docker.io", "octocat", "hunter2")
//!     .with_dry_run(true);
//! orchestrator.run(&registry, &BuildConfig::new(".", "latest"), &PushConfig::default())?;
//!
//! assert_eq!(orchestrator.stage(), Stage::Done);
//! assert_eq!(runner.len(), 1);
//! # Ok::<(), shoyu_plugin::PluginError>(())
//! ```

mod error;
mod orchestrator;
mod runner;

pub use error::{PluginError, Result};
pub use orchestrator::{Orchestrator, Stage};
pub use runner::{ProcessRunner, RecordingRunner, SystemRunner};
