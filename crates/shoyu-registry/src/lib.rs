//! # Shoyu Registry
//!
//! Generates the registry authentication file makisu reads through
//! `--registry-config`.
//!
//! The file maps registry host patterns to per-repository security
//! settings. It is built by overlaying three fragments, later ones replacing
//! earlier entries for the same host:
//!
//! 1. anonymous access to the public registry (`index.docker.io`)
//! 2. anonymous access to the mirror, when one is configured
//! 3. basic authentication for the target registry
//!
//! ## Quick Start
//!
//! ```rust
//! use shoyu_core::RegistryCredential;
//! use shoyu_registry::{merge_auth_config, AuthFile, MemoryFileWriter};
//!
//! let credential = RegistryCredential::new("registry.example.com", "octocat", "hunter2");
//!
//! let merged = merge_auth_config(&credential)?;
//! assert_eq!(merged.len(), 2);
//!
//! let writer = MemoryFileWriter::new();
//! let file = AuthFile::new("/makisu/registry/config.json", &writer);
//! file.write(&credential)?;
//! assert!(writer.contents("/makisu/registry/config.json").is_some());
//! # Ok::<(), shoyu_registry::RegistryError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        AuthFile                          │
//! │  ┌──────────────┐  ┌───────────────┐  ┌───────────────┐  │
//! │  │  templates   │─▶│ MergedAuthMap │─▶│  FileWriter   │  │
//! │  │ (fragments)  │  │   (overlay)   │  │ (OS / memory) │  │
//! │  └──────────────┘  └───────────────┘  └───────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//!              /makisu/registry/config.json (0644)
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod auth;
mod error;
mod merge;
mod templates;
mod writer;

pub use auth::{
    BasicAuth, MergedAuthMap, RepositoryConfig, RepositoryMap, SecurityConfig, TlsClientConfig,
    TlsConfig,
};
pub use error::RegistryError;
pub use merge::{merge_auth_config, AuthFile, AUTH_FILE_MODE, DEFAULT_AUTH_PATH};
pub use templates::REPOSITORY_PATTERN;
pub use writer::{FileWriter, MemoryFileWriter, OsFileWriter, WrittenFile};
