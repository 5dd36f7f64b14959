use super::{Countdown, ScheduleError, fields, next_trigger, snooze_trigger};
use crate::clock::Clock;
use crate::types::{EpochMillis, Meridiem, TimeFormat, WallClockTime};

/// The alarm calculations bound to a clock.
///
/// Each call takes a fresh reading from the clock; nothing is cached between
/// calls. Field extraction uses the clock's zone.
#[derive(Debug, Clone, Default)]
pub struct AlarmClock<C> {
    clock: C,
}

impl<C: Clock> AlarmClock<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Next instant the wall clock reads `time`, strictly in the future.
    pub fn next_trigger(&self, time: WallClockTime) -> Result<EpochMillis, ScheduleError> {
        next_trigger(&self.clock.now(), time).map(EpochMillis::from)
    }

    /// Whole-minute instant `minutes` from now, strictly in the future.
    pub fn snooze_trigger(&self, minutes: u32) -> Result<EpochMillis, ScheduleError> {
        snooze_trigger(&self.clock.now(), minutes).map(EpochMillis::from)
    }

    /// Countdown from now until `until`.
    pub fn countdown_until(&self, until: EpochMillis) -> Countdown {
        Countdown::between(EpochMillis::from(self.clock.now()), until)
    }

    pub fn hour_of(&self, instant: EpochMillis, format: TimeFormat) -> Result<u32, ScheduleError> {
        fields::hour_of(instant, &self.clock.timezone(), format)
    }

    pub fn minute_of(&self, instant: EpochMillis) -> Result<u32, ScheduleError> {
        fields::minute_of(instant, &self.clock.timezone())
    }

    pub fn meridiem_of(&self, instant: EpochMillis) -> Result<Meridiem, ScheduleError> {
        fields::meridiem_of(instant, &self.clock.timezone())
    }

    pub fn wall_clock_time_of(
        &self,
        instant: EpochMillis,
        format: TimeFormat,
    ) -> Result<WallClockTime, ScheduleError> {
        fields::wall_clock_time_of(instant, &self.clock.timezone(), format)
    }
}
