//! Timestamps and time periods.

use chrono::{DateTime, Duration, Utc};

use crate::error::ValidationError;

/// UTC timestamp used for sensor readings.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an RFC 3339 timestamp such as `2024-03-01T10:00:00Z`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTimestamp`] when `value` is malformed.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| ValidationError::InvalidTimestamp(value.to_owned()))
}

/// Closed interval `[start, end]` with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: Timestamp,
    end: Timestamp,
}

impl Period {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPeriod`] when `end` precedes `start`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvalidPeriod);
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Timestamp {
        self.end
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(&self, ts: Timestamp) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Cut the period into consecutive windows of `step`; the last window is
    /// clipped to `end`. A zero-length period or a non-positive step yields
    /// nothing.
    #[must_use]
    pub fn windows(&self, step: Duration) -> Vec<Period> {
        let mut windows = Vec::new();
        if step <= Duration::zero() {
            return windows;
        }
        let mut cursor = self.start;
        while cursor < self.end {
            let next = cursor
                .checked_add_signed(step)
                .map_or(self.end, |next| next.min(self.end));
            windows.push(Period {
                start: cursor,
                end: next,
            });
            cursor = next;
        }
        windows
    }
}
