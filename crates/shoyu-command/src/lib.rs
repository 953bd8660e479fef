//! # Shoyu Command
//!
//! Translates shoyu configuration records into makisu argument vectors.
//!
//! Output is deterministic: the same configuration always produces the same
//! arguments in the same order. Flags come out in a fixed order (repeatable
//! list flags, scalar flags, boolean flags, nested sub-config flags) and are
//! followed by the single positional argument. Unset fields never produce a
//! flag, and every flag value is its own element, so nothing needs shell
//! quoting.
//!
//! ## Example
//!
//! ```rust
//! use shoyu_command::{ActionArgs, Invocation, MAKISU_BINARY};
//! use shoyu_core::{BuildConfig, GlobalOptions};
//!
//! let mut build = BuildConfig::new(".", "latest");
//! build.build_args = vec!["FOO=bar".to_string(), "BAZ=qux".to_string()];
//!
//! let args = build.to_args().unwrap();
//! assert_eq!(
//!     args.as_slice(),
//!     ["--build-arg", "FOO=bar", "--build-arg", "BAZ=qux", "--tag", "latest", "."]
//! );
//!
//! let invocation = Invocation::new(MAKISU_BINARY, &GlobalOptions::default(), &build).unwrap();
//! assert_eq!(invocation.argv()[..3], ["--log-fmt", "console", "build"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod args;
pub mod builder;
pub mod flags;
pub mod invocation;

#[cfg(test)]
mod proptest_tests;

pub use args::ArgVector;
pub use builder::{global_args, Action, ActionArgs, AppendFlags};
pub use invocation::{Invocation, MAKISU_BINARY};
