//! Append-only argument vector.

use std::fmt;
use std::time::Duration;

use shoyu_core::duration::format_duration;

use crate::flags::SECRET_FLAGS;

/// Ordered, append-only list of process arguments.
///
/// The `flag*` helpers encode the emission rules: empty strings, `false`
/// and zero durations add nothing, and list values add one flag/value pair
/// per element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArgVector {
    args: Vec<String>,
}

impl ArgVector {
    /// Creates an empty argument vector.
    #[must_use]
    pub const fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Appends a flag/value pair when `value` is non-empty.
    pub fn flag(&mut self, flag: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.args.push(flag.to_string());
            self.args.push(value.to_string());
        }
        self
    }

    /// Appends one flag/value pair per element of `values`.
    pub fn flag_each(&mut self, flag: &str, values: &[String]) -> &mut Self {
        for value in values {
            self.args.push(flag.to_string());
            self.args.push(value.clone());
        }
        self
    }

    /// Appends a bare flag when `enabled` is true.
    pub fn switch(&mut self, flag: &str, enabled: bool) -> &mut Self {
        if enabled {
            self.args.push(flag.to_string());
        }
        self
    }

    /// Appends a flag/value pair in Go duration form when `value` is non-zero.
    pub fn flag_duration(&mut self, flag: &str, value: Duration) -> &mut Self {
        if !value.is_zero() {
            self.args.push(flag.to_string());
            self.args.push(format_duration(value));
        }
        self
    }

    /// Appends a positional argument unconditionally.
    pub fn positional(&mut self, value: impl Into<String>) -> &mut Self {
        self.args.push(value.into());
        self
    }

    /// Appends every argument of `other`.
    pub fn extend(&mut self, other: Self) -> &mut Self {
        self.args.extend(other.args);
        self
    }

    /// Returns the arguments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns true if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Returns an iterator over the arguments.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.args.iter()
    }

    /// Returns the value that follows each occurrence of `flag`.
    #[must_use]
    pub fn values_of(&self, flag: &str) -> Vec<&str> {
        self.args
            .windows(2)
            .filter(|pair| pair[0] == flag)
            .map(|pair| pair[1].as_str())
            .collect()
    }

    /// Consumes the vector and returns the underlying arguments.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.args
    }
}

impl IntoIterator for ArgVector {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArgVector {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

/// Renders the arguments for logs, hiding secret flag values.
impl fmt::Display for ArgVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hide_next = false;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if hide_next {
                f.write_str("<redacted>")?;
            } else if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, "{arg:?}")?;
            } else {
                f.write_str(arg)?;
            }
            hide_next = SECRET_FLAGS.contains(&arg.as_str());
        }
        Ok(())
    }
}
