//! Clock-face conventions: 24-hour versus 12-hour with a meridiem.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How an hour field is interpreted and rendered.
///
/// Derived by the caller from the device's locale settings and passed in;
/// the core never stores it as mutable state.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum TimeFormat {
    /// 24-hour clock, hours 0--23.
    #[default]
    #[strum(to_string = "24h", serialize = "military")]
    Military,

    /// 12-hour clock, hours 1--12 plus a [`Meridiem`].
    #[strum(to_string = "12h", serialize = "ampm")]
    AmPm,
}

impl TimeFormat {
    /// Inclusive hour range accepted in this format.
    pub fn hour_range(self) -> std::ops::RangeInclusive<u32> {
        match self {
            TimeFormat::Military => 0..=23,
            TimeFormat::AmPm => 1..=12,
        }
    }
}

/// AM/PM designator. Only meaningful alongside [`TimeFormat::AmPm`].
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Meridiem {
    #[default]
    #[strum(to_string = "AM")]
    Am,
    #[strum(to_string = "PM")]
    Pm,
}

impl Meridiem {
    /// Meridiem of a 24-hour clock hour: AM for 0--11, PM otherwise.
    pub fn of_hour(hour24: u32) -> Self {
        if hour24 < 12 { Meridiem::Am } else { Meridiem::Pm }
    }

    /// Convert a 12-hour clock hour (1--12) in this meridiem to 0--23.
    ///
    /// 12 AM is midnight and 12 PM is noon; every other PM hour moves up by
    /// twelve.
    pub fn to_hour24(self, hour12: u32) -> u32 {
        match (self, hour12) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        }
    }
}
