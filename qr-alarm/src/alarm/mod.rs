//! Alarm time computation.
//!
//! Four pure calculations, each taking "now" (or two instants) explicitly:
//!
//! - [`next_trigger`]: a time of day to the next future instant it occurs.
//! - [`snooze_trigger`]: minutes from now to a whole-minute instant.
//! - [`Countdown::between`]: two instants to an hours/minutes pair.
//! - [`fields`]: hour, minute and meridiem of an instant for display.
//!
//! [`AlarmClock`] binds them to a [`Clock`](crate::clock::Clock) so callers
//! can work purely in [`EpochMillis`](crate::types::EpochMillis).

mod calculator;
mod countdown;
pub mod fields;
mod next_trigger;
mod snooze;

use thiserror::Error;

use crate::types::TimeError;

pub use calculator::AlarmClock;
pub use countdown::Countdown;
pub use next_trigger::next_trigger;
pub use snooze::snooze_trigger;

/// Errors from turning times into trigger instants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// Date arithmetic left the representable range, or an instant could
    /// not be placed on the calendar.
    #[error("Time is outside the representable date range")]
    OutOfRange,

    #[error(transparent)]
    Time(#[from] TimeError),

    /// The platform alarm service refused the request.
    #[error("Alarm service failed: {0}")]
    Service(String),
}
