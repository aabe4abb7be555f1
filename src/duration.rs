//! Human-readable durations for expire/keep values.
//!
//! Accepts strings like `7d`, `12h`, `1w` or compound forms like `1d12h`.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{AgingError, Result};

/// Seconds per time unit.
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_DAY: u64 = 86400;
const SECONDS_PER_WEEK: u64 = 604_800;

/// A span of whole seconds, parsed from and displayed as a human-readable
/// duration string. `Display` output always re-parses to the same value,
/// which is what makes the string form safe to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeSpan {
    secs: u64,
}

impl AgeSpan {
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    #[must_use]
    pub const fn from_days(days: u64) -> Self {
        Self {
            secs: days * SECONDS_PER_DAY,
        }
    }

    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.secs
    }

    /// Parse a duration string into an `AgeSpan`.
    ///
    /// Supported units: `s`, `m`, `h`, `d`, `w` (with long-form aliases such
    /// as `days` or `hours`). Tokens may be chained: `1d12h` is 36 hours.
    ///
    /// # Errors
    /// Returns an error for empty input, a missing number or unit, an
    /// unknown unit, or a total of zero.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AgingError::Config(
                "Duration cannot be empty. Expected format: <number><unit> (e.g., 7d, 1w, 12h)"
                    .to_string(),
            ));
        }

        let mut total: u64 = 0;
        let mut rest = input;
        while !rest.is_empty() {
            let unit_start = rest.find(|c: char| !c.is_ascii_digit()).ok_or_else(|| {
                AgingError::Config(format!(
                    "Invalid duration: '{input}'. Missing unit. Expected format: <number><unit> (e.g., 7d, 1w, 12h)"
                ))
            })?;
            if unit_start == 0 {
                return Err(AgingError::Config(format!(
                    "Invalid duration: '{input}'. Missing number. Expected format: <number><unit> (e.g., 7d, 1w, 12h)"
                )));
            }

            let (num_str, tail) = rest.split_at(unit_start);
            let unit_end = tail
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(tail.len());
            let (unit, tail) = tail.split_at(unit_end);

            let value: u64 = num_str.parse().map_err(|_| {
                AgingError::Config(format!(
                    "Invalid duration number: '{num_str}'. Expected a positive integer"
                ))
            })?;

            total = total.saturating_add(value.saturating_mul(unit_multiplier(input, unit)?));
            rest = tail;
        }

        if total == 0 {
            return Err(AgingError::Config(
                "Duration must be greater than zero".to_string(),
            ));
        }

        Ok(Self::from_secs(total))
    }
}

fn unit_multiplier(input: &str, unit: &str) -> Result<u64> {
    match unit.to_lowercase().as_str() {
        "s" | "sec" | "secs" | "second" | "seconds" => Ok(1),
        "m" | "min" | "mins" | "minute" | "minutes" => Ok(SECONDS_PER_MINUTE),
        "h" | "hr" | "hrs" | "hour" | "hours" => Ok(SECONDS_PER_HOUR),
        "d" | "day" | "days" => Ok(SECONDS_PER_DAY),
        "w" | "wk" | "wks" | "week" | "weeks" => Ok(SECONDS_PER_WEEK),
        _ => Err(AgingError::Config(format!(
            "Invalid duration unit in '{input}': '{unit}'. Supported units: s, m, h, d, w"
        ))),
    }
}

impl fmt::Display for AgeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Greedy decomposition, weeks excluded so day counts stay readable.
        let mut secs = self.secs;
        let mut written = false;
        for (unit, size) in [
            ("d", SECONDS_PER_DAY),
            ("h", SECONDS_PER_HOUR),
            ("m", SECONDS_PER_MINUTE),
            ("s", 1),
        ] {
            let count = secs / size;
            if count > 0 {
                write!(f, "{count}{unit}")?;
                secs %= size;
                written = true;
            }
        }
        if !written {
            write!(f, "0s")?;
        }
        Ok(())
    }
}

impl FromStr for AgeSpan {
    type Err = AgingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for AgeSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AgeSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}
