//! Time handling for archive queries.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A half-open time range `[start, end)` for archive queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Parse both ends with [`parse_datetime`].
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeParseError> {
        Ok(Self::new(parse_datetime(start)?, parse_datetime(end)?))
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Calendar days touched by the range, starting from midnight of `start`.
    ///
    /// A day is included while its midnight is strictly before `end`.
    /// An empty range touches no days.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        if self.is_empty() {
            return days;
        }

        let mut day = self.start.date_naive();

        while midnight(day) < self.end {
            days.push(day);
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        days
    }
}

/// Midnight UTC at the start of `day`.
pub fn midnight(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(chrono::NaiveTime::MIN))
}

/// Parse a timestamp given on the command line or in configuration.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` (UTC assumed)
/// and a bare date (midnight UTC).
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(midnight(date));
    }

    Err(TimeParseError::InvalidFormat(s.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
}

impl From<TimeParseError> for crate::NexradError {
    fn from(err: TimeParseError) -> Self {
        crate::NexradError::InvalidTime(err.to_string())
    }
}
