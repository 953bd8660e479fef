//! Flags applied to every makisu action.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::parse_sub_config;

/// Global makisu flags, shared by the build and push actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalOptions {
    /// CPU profiling options.
    #[serde(default)]
    pub cpu: CpuOptions,
    /// Logging options.
    #[serde(default)]
    pub log: LogOptions,
}

/// `--cpu-*` global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuOptions {
    /// Enables CPU profiling of the builder.
    pub profile: bool,
}

/// `--log-*` global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// Log format: `json` or `console`.
    pub fmt: String,
    /// Log level: `debug`, `info`, `warn` or `error`.
    pub level: String,
    /// Log output path.
    pub output: String,
}

impl Default for GlobalOptions {
    /// Console-formatted logs, no profiling.
    fn default() -> Self {
        Self {
            cpu: CpuOptions::default(),
            log: LogOptions {
                fmt: "console".to_string(),
                ..LogOptions::default()
            },
        }
    }
}

impl GlobalOptions {
    /// Parses global options from raw JSON text.
    ///
    /// Empty text yields [`GlobalOptions::default`]. Supplied text replaces
    /// the defaults entirely; it is not merged into them.
    ///
    /// # Errors
    ///
    /// Returns a flag encoding error for `global.flags` if the text is not
    /// valid JSON for this record.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoyu_core::GlobalOptions;
    ///
    /// let options = GlobalOptions::from_raw(r#"{"cpu": {"profile": true}}"#).unwrap();
    /// assert!(options.cpu.profile);
    /// assert!(options.log.fmt.is_empty());
    ///
    /// assert_eq!(GlobalOptions::from_raw("").unwrap(), GlobalOptions::default());
    /// ```
    pub fn from_raw(raw: &str) -> Result<Self> {
        Ok(parse_sub_config("global.flags", raw)?.unwrap_or_default())
    }
}
