//! Wall-clock task deadlines.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

const ACCEPTED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Timestamp with a trailing UTC offset, e.g. `2024-01-05 09:30:00 +0900`.
const OFFSET_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Deadline with minute precision and no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(NaiveDateTime);

impl Deadline {
    /// Wraps a timestamp, dropping seconds and sub-second precision.
    #[must_use]
    pub fn new(value: NaiveDateTime) -> Self {
        let truncated = value
            .with_second(0)
            .and_then(|minute| minute.with_nanosecond(0))
            .unwrap_or(value);
        Self(truncated)
    }

    /// Parses form input; blank input means "no deadline".
    ///
    /// Accepts `YYYY-MM-DDTHH:MM` as sent by `datetime-local` inputs, the
    /// space-separated variant, and both with seconds. A timestamp carrying
    /// a trailing UTC offset keeps its wall-clock time; the offset is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDeadline`] for any other input.
    pub fn parse(raw: &str) -> Result<Option<Self>, TaskDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        ACCEPTED_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .or_else(|| {
                DateTime::parse_from_str(trimmed, OFFSET_FORMAT)
                    .ok()
                    .map(|stamped| stamped.naive_local())
            })
            .map(|value| Some(Self::new(value)))
            .ok_or_else(|| TaskDomainError::InvalidDeadline(raw.to_owned()))
    }

    /// Returns the wrapped timestamp.
    #[must_use]
    pub const fn value(self) -> NaiveDateTime {
        self.0
    }
}
