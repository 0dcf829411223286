//! Typed coercions layered on the core lookup.
//!
//! Responsibilities:
//! - Coerce resolved values to integers, booleans, times, URIs, and lists.
//! - Map coercion failures to `ConfigError::InvalidFormat`; absence stays a
//!   normal outcome (`None`, `false`, empty vec) on every fail-soft path.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use url::Url;

use super::error::ConfigError;
use super::resolve::Config;
use crate::value::ConfigValue;

impl Config {
    /// The value for `key` as a base-10 integer.
    ///
    /// An integer default registered via
    /// [`set_default`](Self::set_default) passes through without reparsing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFormat`] if the value is present but
    /// not an integer.
    pub fn int(&self, key: &str) -> Result<Option<i64>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(ConfigValue::Int(n)) => Ok(Some(n)),
            Some(value) => {
                let raw = value.into_string();
                match raw.parse::<i64>() {
                    Ok(n) => Ok(Some(n)),
                    Err(_) => Err(ConfigError::InvalidFormat {
                        key: key.to_string(),
                        value: raw,
                        message: "must be a base-10 integer".to_string(),
                    }),
                }
            }
        }
    }

    /// True iff the value for `key` is boolean `true` or the exact string
    /// `"true"`. Anything else, including absence, is false. Never fails.
    pub fn bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(ConfigValue::Bool(b)) => b,
            Some(ConfigValue::Str(s)) => s == "true",
            _ => false,
        }
    }

    /// The value for `key` as a calendar time.
    ///
    /// Accepts a year, optional month/day, optional time-of-day, and an
    /// optional RFC 3339 zone; month and day need not be zero-padded.
    /// Zone-aware inputs are normalized to naive UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFormat`] if the value is present but
    /// unparseable.
    pub fn time(&self, key: &str) -> Result<Option<NaiveDateTime>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => {
                let raw = value.into_string();
                match parse_time(&raw) {
                    Some(t) => Ok(Some(t)),
                    None => Err(ConfigError::InvalidFormat {
                        key: key.to_string(),
                        value: raw,
                        message: "must be a calendar time".to_string(),
                    }),
                }
            }
        }
    }

    /// The value for `key` parsed as a URI, exposing scheme, host, port,
    /// path, query, username, and password components.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFormat`] if the value is present but
    /// not a valid URI.
    pub fn uri(&self, key: &str) -> Result<Option<Url>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => {
                let raw = value.into_string();
                match Url::parse(&raw) {
                    Ok(url) => Ok(Some(url)),
                    Err(e) => Err(ConfigError::InvalidFormat {
                        key: key.to_string(),
                        value: raw,
                        message: e.to_string(),
                    }),
                }
            }
        }
    }

    /// The value for `key` split on `,` into a list, with no trimming.
    ///
    /// Absence and the empty string both yield an empty vec; interior empty
    /// segments are kept. Never fails.
    pub fn array(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            None => Vec::new(),
            Some(value) => {
                let raw = value.into_string();
                if raw.is_empty() {
                    Vec::new()
                } else {
                    raw.split(',').map(str::to_string).collect()
                }
            }
        }
    }
}

/// Flexible calendar-time grammar: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, an
/// optional `T`- or space-separated `HH:MM[:SS]`, or full RFC 3339.
pub(crate) fn parse_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Some(zoned.naive_utc());
    }
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(t);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    // Year and year-month forms cannot be expressed as a complete chrono
    // format string, so take them apart by hand.
    let mut parts = raw.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = match parts.next() {
        Some(m) => m.parse().ok()?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}
