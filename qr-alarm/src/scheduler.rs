//! Hands computed trigger instants to the platform alarm service.
//!
//! The scheduler is the one stateful piece: it remembers the instant it last
//! handed off so the UI can show a countdown, and it keeps that instant only
//! once the service has accepted it.

use anyhow::Result;

use crate::alarm::{AlarmClock, Countdown, ScheduleError};
use crate::clock::Clock;
use crate::config::{AlarmConfig, ConfigError};
use crate::tracing::prelude::*;
use crate::types::{EpochMillis, TimeFormat, WallClockTime};

/// The platform's wake-up facility (e.g. an OS alarm manager).
///
/// Implementations register a single exact wake-up; setting a new one
/// replaces the old.
pub trait AlarmService {
    fn set_alarm(&mut self, at: EpochMillis) -> Result<()>;

    fn cancel_alarm(&mut self) -> Result<()>;
}

pub struct AlarmScheduler<C, S> {
    alarms: AlarmClock<C>,
    service: S,
    config: AlarmConfig,
    pending: Option<EpochMillis>,
}

impl<C: Clock, S: AlarmService> AlarmScheduler<C, S> {
    pub fn new(clock: C, service: S, config: AlarmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            alarms: AlarmClock::new(clock),
            service,
            config,
            pending: None,
        })
    }

    /// Schedule the alarm for the next occurrence of `time`.
    pub fn schedule(&mut self, time: WallClockTime) -> Result<EpochMillis, ScheduleError> {
        let at = self.alarms.next_trigger(time)?;
        self.hand_off(at)?;
        info!(%time, at = at.as_millis(), "Alarm scheduled, rings in {}", self.alarms.countdown_until(at));
        Ok(at)
    }

    /// Re-arm the alarm `minutes` from now.
    pub fn snooze(&mut self, minutes: u32) -> Result<EpochMillis, ScheduleError> {
        let at = self.alarms.snooze_trigger(minutes)?;
        self.hand_off(at)?;
        info!(minutes, at = at.as_millis(), "Alarm snoozed");
        Ok(at)
    }

    /// Snooze for the configured default length.
    pub fn snooze_default(&mut self) -> Result<EpochMillis, ScheduleError> {
        self.snooze(self.config.default_snooze_minutes)
    }

    /// Cancel the pending alarm. A no-op when nothing is pending.
    pub fn cancel(&mut self) -> Result<(), ScheduleError> {
        let Some(at) = self.pending else {
            debug!("Cancel requested with no alarm pending");
            return Ok(());
        };

        self.service.cancel_alarm().map_err(|e| {
            warn!(at = at.as_millis(), "Alarm service failed to cancel: {e:#}");
            ScheduleError::Service(format!("{e:#}"))
        })?;
        self.pending = None;
        info!(at = at.as_millis(), "Alarm cancelled");
        Ok(())
    }

    /// The instant last accepted by the alarm service, if any.
    pub fn pending(&self) -> Option<EpochMillis> {
        self.pending
    }

    /// Time left until the pending alarm.
    pub fn countdown(&self) -> Option<Countdown> {
        self.pending.map(|at| self.alarms.countdown_until(at))
    }

    /// The pending alarm as the time picker would show it.
    pub fn pending_time(&self, format: TimeFormat) -> Option<Result<WallClockTime, ScheduleError>> {
        self.pending
            .map(|at| self.alarms.wall_clock_time_of(at, format))
    }

    pub fn config(&self) -> &AlarmConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    fn hand_off(&mut self, at: EpochMillis) -> Result<(), ScheduleError> {
        self.service.set_alarm(at).map_err(|e| {
            warn!(at = at.as_millis(), "Alarm service rejected trigger: {e:#}");
            ScheduleError::Service(format!("{e:#}"))
        })?;
        self.pending = Some(at);
        Ok(())
    }
}
