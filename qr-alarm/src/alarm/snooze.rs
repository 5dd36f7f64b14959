use chrono::{DateTime, Days, DurationRound, Offset, TimeDelta, TimeZone};

use super::ScheduleError;
use super::next_trigger::resolve_local;
use crate::tracing::prelude::*;

/// The instant `minutes` from `now`, truncated to the start of that minute.
///
/// Truncation can only pull the result back to `now` or earlier when
/// `minutes` is zero; that case rolls forward a calendar day the same way
/// [`next_trigger`](super::next_trigger) does, so the result is always
/// strictly after `now`.
pub fn snooze_trigger<Tz: TimeZone>(
    now: &DateTime<Tz>,
    minutes: u32,
) -> Result<DateTime<Tz>, ScheduleError> {
    let later = now
        .clone()
        .checked_add_signed(TimeDelta::minutes(minutes.into()))
        .ok_or(ScheduleError::OutOfRange)?;
    let truncated = later
        .duration_trunc(TimeDelta::minutes(1))
        .map_err(|_| ScheduleError::OutOfRange)?;

    if truncated > *now {
        trace!(minutes, "Snooze trigger computed");
        return Ok(truncated);
    }

    trace!(minutes, "Snooze trigger not in the future, rolling to tomorrow");
    let next_day = truncated
        .date_naive()
        .checked_add_days(Days::new(1))
        .ok_or(ScheduleError::OutOfRange)?;
    resolve_local(
        &now.timezone(),
        next_day.and_time(truncated.time()),
        truncated.offset().fix(),
    )
}
