//! Display fields of an instant in a given zone.

use chrono::{TimeZone, Timelike};

use super::ScheduleError;
use crate::types::{EpochMillis, Meridiem, TimeFormat, WallClockTime};

fn local_hour_minute<Tz: TimeZone>(
    instant: EpochMillis,
    tz: &Tz,
) -> Result<(u32, u32), ScheduleError> {
    let local = instant.to_zoned(tz).ok_or(ScheduleError::OutOfRange)?;
    Ok((local.hour(), local.minute()))
}

/// Convert a 24-hour clock hour to how `format` shows it.
pub fn display_hour(hour24: u32, format: TimeFormat) -> u32 {
    match format {
        TimeFormat::Military => hour24,
        TimeFormat::AmPm => match hour24 {
            0 => 12,
            13.. => hour24 - 12,
            _ => hour24,
        },
    }
}

/// Local hour of `instant`: 0--23 for [`TimeFormat::Military`], 1--12 for
/// [`TimeFormat::AmPm`].
pub fn hour_of<Tz: TimeZone>(
    instant: EpochMillis,
    tz: &Tz,
    format: TimeFormat,
) -> Result<u32, ScheduleError> {
    let (hour, _) = local_hour_minute(instant, tz)?;
    Ok(display_hour(hour, format))
}

pub fn minute_of<Tz: TimeZone>(instant: EpochMillis, tz: &Tz) -> Result<u32, ScheduleError> {
    let (_, minute) = local_hour_minute(instant, tz)?;
    Ok(minute)
}

pub fn meridiem_of<Tz: TimeZone>(instant: EpochMillis, tz: &Tz) -> Result<Meridiem, ScheduleError> {
    let (hour, _) = local_hour_minute(instant, tz)?;
    Ok(Meridiem::of_hour(hour))
}

/// All three fields at once, as the time picker would show them.
///
/// Feeding the result back into [`next_trigger`](super::next_trigger)
/// names the same wall time.
pub fn wall_clock_time_of<Tz: TimeZone>(
    instant: EpochMillis,
    tz: &Tz,
    format: TimeFormat,
) -> Result<WallClockTime, ScheduleError> {
    let (hour, minute) = local_hour_minute(instant, tz)?;
    let time = WallClockTime::new(
        display_hour(hour, format),
        minute,
        format,
        Meridiem::of_hour(hour),
    )?;
    Ok(time)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};
    use chrono_tz::Asia::Kolkata;
    use test_case::test_case;

    use super::*;

    fn at(hour: u32, minute: u32) -> EpochMillis {
        Utc.with_ymd_and_hms(2024, 5, 14, hour, minute, 0)
            .unwrap()
            .into()
    }

    #[test_case(0 => (0, 12, Meridiem::Am); "midnight")]
    #[test_case(1 => (1, 1, Meridiem::Am); "one_am")]
    #[test_case(11 => (11, 11, Meridiem::Am); "eleven_am")]
    #[test_case(12 => (12, 12, Meridiem::Pm); "noon")]
    #[test_case(13 => (13, 1, Meridiem::Pm); "one_pm")]
    #[test_case(23 => (23, 11, Meridiem::Pm); "eleven_pm")]
    fn hour_in_each_format(hour: u32) -> (u32, u32, Meridiem) {
        let instant = at(hour, 7);
        (
            hour_of(instant, &Utc, TimeFormat::Military).unwrap(),
            hour_of(instant, &Utc, TimeFormat::AmPm).unwrap(),
            meridiem_of(instant, &Utc).unwrap(),
        )
    }

    #[test]
    fn minute_is_local() {
        // Kolkata is UTC+05:30, so the minute differs from UTC.
        let instant = at(10, 15);
        assert_eq!(minute_of(instant, &Utc).unwrap(), 15);
        assert_eq!(minute_of(instant, &Kolkata).unwrap(), 45);
        assert_eq!(hour_of(instant, &Kolkata, TimeFormat::Military).unwrap(), 15);
        assert_eq!(meridiem_of(instant, &Kolkata).unwrap(), Meridiem::Pm);
    }

    #[test]
    fn wall_clock_time_matches_fields() {
        let tz = FixedOffset::west_opt(7 * 3600).unwrap();
        let instant = at(3, 40); // 20:40 the previous evening at -07:00

        let time = wall_clock_time_of(instant, &tz, TimeFormat::AmPm).unwrap();
        assert_eq!(time, WallClockTime::am_pm(8, 40, Meridiem::Pm).unwrap());

        let time = wall_clock_time_of(instant, &tz, TimeFormat::Military).unwrap();
        assert_eq!(time, WallClockTime::military(20, 40).unwrap());
    }

    #[test]
    fn out_of_range_instant_is_an_error() {
        let instant = EpochMillis::new(i64::MAX);
        assert_eq!(
            hour_of(instant, &Utc, TimeFormat::Military),
            Err(ScheduleError::OutOfRange)
        );
        assert_eq!(minute_of(instant, &Utc), Err(ScheduleError::OutOfRange));
        assert_eq!(meridiem_of(instant, &Utc), Err(ScheduleError::OutOfRange));
    }
}
