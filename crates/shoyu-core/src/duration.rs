//! Go-style duration codec.
//!
//! makisu reads durations in Go's `time.Duration` text form (`1m0s`,
//! `168h0m0s`, `250ms`). Values are parsed into [`std::time::Duration`] and
//! rendered back the way Go prints them, so `"60s"` is emitted as `1m0s`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Largest duration Go can represent (`math.MaxInt64` nanoseconds).
const MAX_NANOS: u128 = i64::MAX as u128;

/// Fractional digits beyond this are dropped while parsing.
const MAX_FRACTION_DIGITS: usize = 18;

/// Errors produced while parsing a duration string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// The input was empty.
    #[error("empty duration")]
    Empty,

    /// A component had no digits (e.g. `"h"` or `"."`).
    #[error("invalid duration \"{0}\"")]
    Invalid(String),

    /// A number was not followed by a unit.
    #[error("missing unit in duration \"{0}\"")]
    MissingUnit(String),

    /// The unit is not one of `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`.
    #[error("unknown unit \"{unit}\" in duration \"{input}\"")]
    UnknownUnit {
        /// The unrecognized unit.
        unit: String,
        /// The full input.
        input: String,
    },

    /// The duration is negative.
    #[error("negative duration \"{0}\" is not allowed")]
    Negative(String),

    /// The duration does not fit in a Go duration.
    #[error("duration \"{0}\" is out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3_600 * NANOS_PER_SEC),
        _ => None,
    }
}

/// Splits the leading run of ASCII digits off `s`.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Parses a Go duration string such as `1h30m`, `1.5s` or `0`.
///
/// # Errors
///
/// Returns a [`DurationError`] for empty, malformed, negative or
/// out-of-range input.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use shoyu_core::duration::parse_duration;
///
/// assert_eq!(parse_duration("1m0s").unwrap(), Duration::from_secs(60));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// assert!(parse_duration("soon").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        Some(_) => (false, input),
        None => return Err(DurationError::Empty),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(DurationError::Invalid(input.to_string()));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, tail) = split_digits(rest);
        let (fraction, tail) = match tail.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", tail),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(DurationError::Invalid(input.to_string()));
        }

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let overflow = || DurationError::Overflow(input.to_string());

        let whole_value: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut component = whole_value.checked_mul(scale).ok_or_else(overflow)?;

        let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
        if !fraction.is_empty() {
            let digits: u128 = fraction.parse().map_err(|_| overflow())?;
            let divisor = 10u128.pow(u32::try_from(fraction.len()).map_err(|_| overflow())?);
            component += digits * scale / divisor;
        }

        total = total.checked_add(component).ok_or_else(overflow)?;
        if total > MAX_NANOS {
            return Err(overflow());
        }
        rest = tail;
    }

    if negative && total > 0 {
        return Err(DurationError::Negative(input.to_string()));
    }

    u64::try_from(total)
        .map(Duration::from_nanos)
        .map_err(|_| DurationError::Overflow(input.to_string()))
}

/// Renders `value` with `precision` implied decimal places, trimming
/// trailing zeros (`1500, 3` -> `1.5`).
fn decimal(value: u128, precision: u32) -> String {
    let scale = 10u128.pow(precision);
    let whole = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{fraction:0width$}", width = precision as usize);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// Formats a duration the way Go's `Duration.String` does.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use shoyu_core::duration::format_duration;
///
/// assert_eq!(format_duration(Duration::ZERO), "0s");
/// assert_eq!(format_duration(Duration::from_secs(60)), "1m0s");
/// assert_eq!(format_duration(Duration::from_secs(7 * 24 * 3600)), "168h0m0s");
/// assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}µs", decimal(nanos, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", decimal(nanos, 6));
    }

    let total_secs = nanos / NANOS_PER_SEC;
    let hours = total_secs / 3_600;
    let minutes = (total_secs / 60) % 60;
    let seconds = nanos % (60 * NANOS_PER_SEC);

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&decimal(seconds, 9));
    out.push('s');
    out
}

/// A duration field that arrives either as a native value or as text.
///
/// In JSON the native form is an integer count of nanoseconds (Go's
/// encoding of `time.Duration`); the text form is parsed with
/// [`parse_duration`] when the field is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDuration", into = "RawDuration")]
pub enum DurationValue {
    /// Already-resolved duration.
    Native(Duration),
    /// Unparsed duration text such as `1m0s`.
    Text(String),
}

impl DurationValue {
    /// Resolves the value to a [`Duration`].
    ///
    /// # Errors
    ///
    /// Returns a [`DurationError`] if the text form does not parse.
    pub fn resolve(&self) -> Result<Duration, DurationError> {
        match self {
            Self::Native(duration) => Ok(*duration),
            Self::Text(text) => parse_duration(text),
        }
    }
}

impl From<Duration> for DurationValue {
    fn from(duration: Duration) -> Self {
        Self::Native(duration)
    }
}

impl From<&str> for DurationValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DurationValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(duration) => f.write_str(&format_duration(*duration)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Nanos(u64),
    Text(String),
}

impl From<RawDuration> for DurationValue {
    fn from(raw: RawDuration) -> Self {
        match raw {
            RawDuration::Nanos(nanos) => Self::Native(Duration::from_nanos(nanos)),
            RawDuration::Text(text) => Self::Text(text),
        }
    }
}

impl From<DurationValue> for RawDuration {
    fn from(value: DurationValue) -> Self {
        match value {
            DurationValue::Native(duration) => {
                Self::Nanos(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
            }
            DurationValue::Text(text) => Self::Text(text),
        }
    }
}
