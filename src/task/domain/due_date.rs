//! Validated due-date value object.

use super::TaskDomainError;
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::fmt;

/// `datetime-local` layouts accepted in addition to RFC 3339.
const LOCAL_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Point in time by which a task should be done.
///
/// The text the date was written with is kept verbatim so that snapshots and
/// exports reproduce it exactly; comparisons use the parsed UTC instant.
/// Timestamps without an offset are read in the local time zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DueDate {
    raw: String,
    instant: DateTime<Utc>,
}

impl DueDate {
    /// Parses a due date from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueDate`] when the text is neither
    /// RFC 3339 nor a `YYYY-MM-DDTHH:MM[:SS]` local timestamp, or names a
    /// local time skipped by a daylight-saving change.
    pub fn parse(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let instant = parse_instant(trimmed)
            .ok_or_else(|| TaskDomainError::InvalidDueDate(raw.clone()))?;
        Ok(Self {
            raw: trimmed.to_owned(),
            instant,
        })
    }

    /// Creates a due date from an instant, rendered as RFC 3339 UTC.
    #[must_use]
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self {
            raw: instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            instant,
        }
    }

    /// Returns the text the due date was written with.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed instant.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Returns `true` once `now` has reached the due instant.
    #[must_use]
    pub fn is_due_at(&self, now: DateTime<Utc>) -> bool {
        self.instant <= now
    }
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Utc));
    }
    LOCAL_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
}

impl TryFrom<String> for DueDate {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.raw
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
