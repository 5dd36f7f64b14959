use chrono::{DateTime, Days, FixedOffset, LocalResult, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};

use super::ScheduleError;
use crate::tracing::prelude::*;
use crate::types::WallClockTime;

/// The next instant strictly after `now` at which the local wall clock reads
/// `time`.
///
/// Today's date is tried first with seconds zeroed; if that is not after
/// `now` (including exactly equal), the same wall time tomorrow is used. The
/// day is added on the calendar, not as 24 hours, so across a DST change the
/// result can be 23 or 25 hours away.
pub fn next_trigger<Tz: TimeZone>(
    now: &DateTime<Tz>,
    time: WallClockTime,
) -> Result<DateTime<Tz>, ScheduleError> {
    let tz = now.timezone();
    let preferred = now.offset().fix();
    let time_of_day =
        NaiveTime::from_hms_opt(time.hour24(), time.minute(), 0).ok_or(ScheduleError::OutOfRange)?;

    let today = now.date_naive();
    let candidate = resolve_local(&tz, today.and_time(time_of_day), preferred)?;
    if candidate > *now {
        trace!(%time, "Trigger falls later today");
        return Ok(candidate);
    }

    let tomorrow = today
        .checked_add_days(Days::new(1))
        .ok_or(ScheduleError::OutOfRange)?;
    trace!(%time, "Trigger already passed today, rolling to tomorrow");
    resolve_local(&tz, tomorrow.and_time(time_of_day), preferred)
}

/// Place a local wall time on the timeline of `tz`.
///
/// - In a fall-back overlap the occurrence with `preferred` offset wins if
///   there is one, otherwise the earlier.
/// - In a spring-forward gap the wall time is read with the offset in force
///   before the gap, which lands it the gap's length later.
pub(super) fn resolve_local<Tz: TimeZone>(
    tz: &Tz,
    naive: NaiveDateTime,
    preferred: FixedOffset,
) -> Result<DateTime<Tz>, ScheduleError> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earlier, later) => {
            if later.offset().fix() == preferred {
                Ok(later)
            } else {
                Ok(earlier)
            }
        }
        LocalResult::None => {
            let day_before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .ok_or(ScheduleError::OutOfRange)?;
            let offset = tz
                .offset_from_local_datetime(&day_before)
                .earliest()
                .ok_or(ScheduleError::OutOfRange)?
                .fix();
            let utc = naive
                .checked_sub_signed(TimeDelta::seconds(offset.local_minus_utc().into()))
                .ok_or(ScheduleError::OutOfRange)?;
            debug!(%naive, "Local time falls in a DST gap, shifting past it");
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike, Utc};
    use chrono_tz::America::New_York;
    use test_case::test_case;

    use super::*;
    use crate::types::Meridiem;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn midnight_is_always_tomorrow_and_within_a_day() {
        let now = utc(2024, 5, 14, 10, 23, 45);
        let next = next_trigger(&now, WallClockTime::military(0, 0).unwrap()).unwrap();

        assert_eq!(next, utc(2024, 5, 15, 0, 0, 0));
        assert!(next > now);
        assert!(next - now < TimeDelta::hours(24));
        assert_eq!((next.hour(), next.minute()), (0, 0));
    }

    #[test]
    fn twelve_am_is_midnight() {
        let now = utc(2024, 5, 14, 10, 23, 45);
        let next = next_trigger(&now, WallClockTime::am_pm(12, 0, Meridiem::Am).unwrap()).unwrap();
        assert_eq!((next.hour(), next.minute()), (0, 0));
    }

    #[test]
    fn four_fifteen_pm_is_sixteen_fifteen_today() {
        let now = utc(2024, 5, 14, 10, 23, 45);
        let next = next_trigger(&now, WallClockTime::am_pm(4, 15, Meridiem::Pm).unwrap()).unwrap();
        assert_eq!(next, utc(2024, 5, 14, 16, 15, 0));
    }

    #[test_case(10, 24 => (2024, 5, 14, 10, 24); "next_minute_is_today")]
    #[test_case(10, 23 => (2024, 5, 15, 10, 23); "current_minute_rolls")]
    #[test_case(10, 22 => (2024, 5, 15, 10, 22); "previous_minute_rolls")]
    #[test_case(23, 59 => (2024, 5, 14, 23, 59); "last_minute_is_today")]
    fn rolls_only_when_passed(hour: u32, minute: u32) -> (i32, u32, u32, u32, u32) {
        use chrono::Datelike;

        let now = utc(2024, 5, 14, 10, 23, 45);
        let next = next_trigger(&now, WallClockTime::military(hour, minute).unwrap()).unwrap();
        assert_eq!(next.second(), 0);
        assert_eq!(next.nanosecond(), 0);
        (next.year(), next.month(), next.day(), next.hour(), next.minute())
    }

    #[test]
    fn exactly_now_rolls_to_tomorrow() {
        let now = utc(2024, 5, 14, 7, 30, 0);
        let next = next_trigger(&now, WallClockTime::military(7, 30).unwrap()).unwrap();
        assert_eq!(next, utc(2024, 5, 15, 7, 30, 0));
    }

    #[test]
    fn rolls_over_year_end() {
        let now = utc(2024, 12, 31, 23, 30, 0);
        let next = next_trigger(&now, WallClockTime::military(0, 15).unwrap()).unwrap();
        assert_eq!(next, utc(2025, 1, 1, 0, 15, 0));
    }

    #[test]
    fn rolls_into_leap_day() {
        let now = utc(2024, 2, 28, 23, 0, 0);
        let next = next_trigger(&now, WallClockTime::military(22, 0).unwrap()).unwrap();
        assert_eq!(next, utc(2024, 2, 29, 22, 0, 0));
    }

    #[test]
    fn every_minute_of_the_day_round_trips() {
        let now = utc(2024, 5, 14, 10, 23, 45);
        for hour in 0..24 {
            for minute in 0..60 {
                let time = WallClockTime::military(hour, minute).unwrap();
                let next = next_trigger(&now, time).unwrap();

                assert!(next > now, "{time} not after now");
                assert!(next - now <= TimeDelta::hours(24), "{time} more than a day out");
                assert_eq!((next.hour(), next.minute()), (hour, minute));
            }
        }
    }

    #[test]
    fn every_twelve_hour_time_round_trips() {
        let now = utc(2024, 5, 14, 10, 23, 45);
        for meridiem in [Meridiem::Am, Meridiem::Pm] {
            for hour in 1..=12 {
                let time = WallClockTime::am_pm(hour, 30, meridiem).unwrap();
                let next = next_trigger(&now, time).unwrap();

                let expected = match (meridiem, hour) {
                    (Meridiem::Am, 12) => 0,
                    (Meridiem::Am, h) => h,
                    (Meridiem::Pm, 12) => 12,
                    (Meridiem::Pm, h) => h + 12,
                };
                assert_eq!(next.hour(), expected, "{time}");
                assert!(next > now);
            }
        }
    }

    #[test]
    fn same_now_gives_same_answer() {
        let now = utc(2024, 5, 14, 10, 23, 45);
        let time = WallClockTime::military(6, 45).unwrap();
        assert_eq!(next_trigger(&now, time), next_trigger(&now, time));
    }

    #[test]
    fn keeps_the_zone_of_now() {
        let now = New_York.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
        let next = next_trigger(&now, WallClockTime::military(6, 30).unwrap()).unwrap();
        assert_eq!(next, New_York.with_ymd_and_hms(2024, 7, 2, 6, 30, 0).unwrap());
    }

    #[test]
    fn day_before_spring_forward_is_23_hours() {
        let now = New_York.with_ymd_and_hms(2024, 3, 9, 23, 0, 0).unwrap();
        let next = next_trigger(&now, WallClockTime::military(23, 0).unwrap()).unwrap();

        assert_eq!((next.hour(), next.minute()), (23, 0));
        assert_eq!(next - now, TimeDelta::hours(23));
    }

    #[test]
    fn day_before_fall_back_is_25_hours() {
        let now = New_York.with_ymd_and_hms(2024, 11, 2, 23, 0, 0).unwrap();
        let next = next_trigger(&now, WallClockTime::military(23, 0).unwrap()).unwrap();

        assert_eq!((next.hour(), next.minute()), (23, 0));
        assert_eq!(next - now, TimeDelta::hours(25));
    }

    #[test]
    fn time_in_spring_forward_gap_shifts_past_it() {
        // 02:30 does not exist on 2024-03-10 in New York.
        let now = New_York.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let next = next_trigger(&now, WallClockTime::military(2, 30).unwrap()).unwrap();

        assert_eq!(next.with_timezone(&Utc), utc(2024, 3, 10, 7, 30, 0));
        assert_eq!((next.hour(), next.minute()), (3, 30));
    }

    #[test]
    fn ambiguous_time_before_overlap_takes_first_occurrence() {
        // 01:30 happens twice on 2024-11-03 in New York.
        let now = New_York.with_ymd_and_hms(2024, 11, 3, 0, 10, 0).unwrap();
        let next = next_trigger(&now, WallClockTime::military(1, 30).unwrap()).unwrap();
        assert_eq!(next.with_timezone(&Utc), utc(2024, 11, 3, 5, 30, 0));
    }

    #[test]
    fn ambiguous_time_during_overlap_keeps_current_offset() {
        // 01:10 EST, the second pass through the repeated hour.
        let now = utc(2024, 11, 3, 6, 10, 0).with_timezone(&New_York);
        let next = next_trigger(&now, WallClockTime::military(1, 30).unwrap()).unwrap();
        assert_eq!(next.with_timezone(&Utc), utc(2024, 11, 3, 6, 30, 0));
    }
}
