//! Timestamp value object for immutable points in time.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Date pattern used when a configured pattern cannot be rendered.
pub const FALLBACK_DATE_PATTERN: &str = "%Y-%m-%d";

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Returns `None` when the value is outside the representable range.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(Self)
    }

    /// Returns the timestamp as Unix seconds.
    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Renders the date part in the local time zone using a strftime pattern.
    pub fn format_local_date(&self, pattern: &str) -> String {
        let local = self.0.with_timezone(&Local);
        let mut out = String::new();
        if is_valid_date_pattern(pattern) && write!(out, "{}", local.format(pattern)).is_ok() {
            return out;
        }
        local.format(FALLBACK_DATE_PATTERN).to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

/// Checks that a strftime pattern contains only recognised specifiers.
pub fn is_valid_date_pattern(pattern: &str) -> bool {
    !pattern.trim().is_empty()
        && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}
