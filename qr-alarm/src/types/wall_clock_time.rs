//! A user-chosen time of day, validated at construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::time_format::{Meridiem, TimeFormat};

/// Errors that can occur when building a [`WallClockTime`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid hour {hour} for {format} format")]
    InvalidHour { hour: u32, format: TimeFormat },

    #[error("Invalid minute {0} (expected 0-59)")]
    InvalidMinute(u32),

    #[error("Cannot parse {0:?} as a time of day (expected HH:MM or H:MM AM|PM)")]
    Parse(String),
}

/// Hour and minute as picked by the user, plus the format they were picked
/// in.
///
/// Always valid: the constructors reject out-of-range fields, so the
/// calculators downstream never see a minute of 60 or a 12-hour "13".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallClockTime {
    hour: u32,
    minute: u32,
    format: TimeFormat,
    meridiem: Meridiem,
}

impl WallClockTime {
    /// A 24-hour time, hour 0--23.
    pub fn military(hour: u32, minute: u32) -> Result<Self, TimeError> {
        Self::new(hour, minute, TimeFormat::Military, Meridiem::of_hour(hour))
    }

    /// A 12-hour time, hour 1--12.
    pub fn am_pm(hour: u32, minute: u32, meridiem: Meridiem) -> Result<Self, TimeError> {
        Self::new(hour, minute, TimeFormat::AmPm, meridiem)
    }

    /// Build from raw fields. `meridiem` is ignored for
    /// [`TimeFormat::Military`] and recomputed from the hour.
    pub fn new(
        hour: u32,
        minute: u32,
        format: TimeFormat,
        meridiem: Meridiem,
    ) -> Result<Self, TimeError> {
        if !format.hour_range().contains(&hour) {
            return Err(TimeError::InvalidHour { hour, format });
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute(minute));
        }

        let meridiem = match format {
            TimeFormat::Military => Meridiem::of_hour(hour),
            TimeFormat::AmPm => meridiem,
        };

        Ok(Self {
            hour,
            minute,
            format,
            meridiem,
        })
    }

    /// Hour as entered, in this time's own format.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn format(&self) -> TimeFormat {
        self.format
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Hour on the 24-hour clock, 0--23.
    pub fn hour24(&self) -> u32 {
        match self.format {
            TimeFormat::Military => self.hour,
            TimeFormat::AmPm => self.meridiem.to_hour24(self.hour),
        }
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            TimeFormat::Military => write!(f, "{:02}:{:02}", self.hour, self.minute),
            TimeFormat::AmPm => write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem),
        }
    }
}

impl FromStr for WallClockTime {
    type Err = TimeError;

    /// Accepts `"HH:MM"` (24-hour) or `"H:MM AM"` / `"H:MMpm"` (12-hour).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || TimeError::Parse(s.to_string());
        let trimmed = s.trim();

        let (clock, meridiem) = match trimmed.len().checked_sub(2) {
            Some(split) if trimmed.is_char_boundary(split) => {
                match trimmed[split..].parse::<Meridiem>() {
                    Ok(m) => (trimmed[..split].trim_end(), Some(m)),
                    Err(_) => (trimmed, None),
                }
            }
            _ => (trimmed, None),
        };

        let (hour, minute) = clock.split_once(':').ok_or_else(parse_err)?;
        if minute.len() != 2 {
            return Err(parse_err());
        }
        let hour: u32 = hour.parse().map_err(|_| parse_err())?;
        let minute: u32 = minute.parse().map_err(|_| parse_err())?;

        match meridiem {
            Some(m) => Self::am_pm(hour, minute, m),
            None => Self::military(hour, minute),
        }
    }
}
