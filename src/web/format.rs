//! Date and time formats used by the rendered pages.

use crate::task::domain::Deadline;
use chrono::{DateTime, Utc};

/// Detail-page deadline, e.g. `2024-01-05 09:30`.
#[must_use]
pub fn deadline_long(deadline: Deadline) -> String {
    deadline.value().format("%Y-%m-%d %H:%M").to_string()
}

/// List-page deadline without leading zeros, e.g. `1/5 9:30`.
#[must_use]
pub fn deadline_short(deadline: Deadline) -> String {
    deadline.value().format("%-m/%-d %-H:%M").to_string()
}

/// Value for a `datetime-local` input, e.g. `2024-01-05T09:30`.
#[must_use]
pub fn deadline_input(deadline: Deadline) -> String {
    deadline.value().format("%Y-%m-%dT%H:%M").to_string()
}

/// Completion date, e.g. `2024-03-15`.
#[must_use]
pub fn completed_on(completed_at: DateTime<Utc>) -> String {
    completed_at.format("%Y-%m-%d").to_string()
}
