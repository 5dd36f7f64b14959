use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::TimeFormat;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No snooze options configured")]
    NoSnoozeOptions,

    #[error("Snooze option of 0 minutes is not allowed")]
    ZeroSnoozeOption,

    #[error("Default snooze of {0} minutes is not one of the configured options")]
    DefaultSnoozeNotOffered(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmConfig {
    /// Clock face used when reading or showing hours. Normally follows the
    /// device locale.
    pub time_format: TimeFormat,

    /// Snooze lengths (minutes) offered when an alarm rings, in display
    /// order.
    pub snooze_options_minutes: Vec<u32>,

    /// Snooze length used when the user does not pick one. Must appear in
    /// `snooze_options_minutes`.
    pub default_snooze_minutes: u32,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::Military,
            snooze_options_minutes: vec![1, 5, 10, 15, 20, 30],
            default_snooze_minutes: 5,
        }
    }
}

impl AlarmConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snooze_options_minutes.is_empty() {
            return Err(ConfigError::NoSnoozeOptions);
        }
        if self.snooze_options_minutes.contains(&0) {
            return Err(ConfigError::ZeroSnoozeOption);
        }
        if !self
            .snooze_options_minutes
            .contains(&self.default_snooze_minutes)
        {
            return Err(ConfigError::DefaultSnoozeNotOffered(
                self.default_snooze_minutes,
            ));
        }
        Ok(())
    }
}
