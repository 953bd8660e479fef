//! # Shoyu Core
//!
//! Configuration records for the shoyu image-build plugin.
//!
//! The plugin drives an external image builder (makisu) through two actions,
//! `build` and `push`. This crate holds the already-resolved configuration
//! for those actions and the structural checks run before anything is
//! executed:
//!
//! - [`BuildConfig`] - options for the build action, including the optional
//!   [`DockerDaemonConfig`], [`HttpCacheConfig`] and [`RedisCacheConfig`]
//!   sub-records
//! - [`PushConfig`] - options for the push action
//! - [`GlobalOptions`] - flags shared by every action
//! - [`RegistryCredential`] - the registry the image is published to
//! - [`duration`] - the Go-style duration codec the builder understands
//!
//! ## Example
//!
//! ```rust
//! use shoyu_core::{BuildConfig, Validate};
//!
//! let build = BuildConfig::new(".", "latest");
//! assert!(build.validate().is_ok());
//!
//! let missing_tag = BuildConfig::new(".", "");
//! assert_eq!(missing_tag.validate().unwrap_err().field, "tag");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod build;
pub mod duration;
pub mod error;
pub mod global;
pub mod options;
pub mod push;
pub mod registry;
pub mod validation;

pub use build::{BuildConfig, DockerDaemonConfig, HttpCacheConfig, RedisCacheConfig};
pub use duration::{DurationError, DurationValue};
pub use error::{Error, Result};
pub use global::{CpuOptions, GlobalOptions, LogOptions};
pub use options::parse_sub_config;
pub use push::PushConfig;
pub use registry::{RegistryCredential, DEFAULT_REGISTRY};
pub use validation::{Validate, ValidationError};
