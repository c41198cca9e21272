//! Time source used to resolve "today".
//!
//! Injected into the date extractor so tests can pin the current date.

use chrono::{FixedOffset, Local, NaiveDate, Utc};

/// Supplies the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock, in the host's local timezone unless an explicit
/// UTC offset is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate "today" at a fixed UTC offset (e.g. +09:00) instead of the
    /// host's local timezone.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    /// Build from a configured offset in minutes. Out-of-range offsets fall
    /// back to local time.
    pub fn from_offset_minutes(minutes: Option<i32>) -> Self {
        match minutes.and_then(|m| m.checked_mul(60)).and_then(FixedOffset::east_opt) {
            Some(offset) => Self::with_offset(offset),
            None => {
                if let Some(m) = minutes {
                    tracing::warn!(utc_offset_minutes = m, "Invalid UTC offset, using local time");
                }
                Self::new()
            }
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
