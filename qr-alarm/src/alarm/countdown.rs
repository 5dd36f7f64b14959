use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::EpochMillis;

const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// Time remaining until a trigger, as whole hours and minutes.
///
/// Never `(0, 0)`: anything under a minute reads as one minute, so an alarm
/// that has not yet fired never shows as due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Countdown {
    hours: u32,
    minutes: u32,
}

impl Countdown {
    /// The shortest countdown that is ever reported.
    pub const ONE_MINUTE: Self = Self {
        hours: 0,
        minutes: 1,
    };

    /// Hours and minutes from `from` until `until`.
    ///
    /// Seconds are dropped, not rounded. The hour component is an hour of
    /// day, so it wraps past 23: a 25-hour gap reads as one hour. A negative
    /// gap is treated as zero.
    pub fn between(from: EpochMillis, until: EpochMillis) -> Self {
        let delta = from.millis_until(until).max(0);
        let hours = (delta / MILLIS_PER_HOUR % 24) as u32;
        let minutes = (delta / MILLIS_PER_MINUTE % 60) as u32;

        if hours == 0 && minutes == 0 {
            Self::ONE_MINUTE
        } else {
            Self { hours, minutes }
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours == 0 {
            write!(f, "{} min", self.minutes)
        } else {
            write!(f, "{} h {} min", self.hours, self.minutes)
        }
    }
}
