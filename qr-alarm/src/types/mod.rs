mod epoch_millis;
mod time_format;
mod wall_clock_time;

pub use epoch_millis::EpochMillis;
pub use time_format::{Meridiem, TimeFormat};
pub use wall_clock_time::{TimeError, WallClockTime};
