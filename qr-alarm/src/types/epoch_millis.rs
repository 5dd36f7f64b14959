//! Absolute instants as handed to the platform alarm service.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// An absolute point in time: signed milliseconds since the Unix epoch.
///
/// This is the representation the platform alarm service and the
/// preference store both speak, so it is what crosses the crate boundary.
/// Convert to a zoned date-time with [`to_zoned`](Self::to_zoned) for any
/// calendar work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub const fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// View this instant in `tz`.
    ///
    /// Returns `None` if the instant lies outside chrono's representable
    /// range (roughly +/-262,000 years).
    pub fn to_zoned<Tz: TimeZone>(self, tz: &Tz) -> Option<DateTime<Tz>> {
        DateTime::<Utc>::from_timestamp_millis(self.0).map(|utc| utc.with_timezone(tz))
    }

    /// Signed milliseconds from `self` until `later`, saturating.
    pub fn millis_until(self, later: EpochMillis) -> i64 {
        later.0.saturating_sub(self.0)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for EpochMillis {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.timestamp_millis())
    }
}

impl From<i64> for EpochMillis {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}
