//! Command-line front end for the alarm time calculations.
//!
//! Useful for checking what a given alarm setting resolves to on this
//! machine's clock and zone.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use serde_json::json;

use qr_alarm::alarm::{AlarmClock, Countdown};
use qr_alarm::clock::SystemClock;
use qr_alarm::config::AlarmConfig;
use qr_alarm::tracing::prelude::*;
use qr_alarm::types::{EpochMillis, TimeFormat, WallClockTime};

#[derive(Debug, Parser)]
#[command(name = "qr-alarm", version, about = "Compute alarm trigger times")]
struct Cli {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Clock face for printed hours: 24h or 12h.
    #[arg(long, global = true, env = "QR_ALARM_TIME_FORMAT")]
    time_format: Option<TimeFormat>,

    /// Snooze length used when `snooze` is given no argument.
    #[arg(long, global = true, env = "QR_ALARM_SNOOZE_MINUTES")]
    snooze_minutes: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Next trigger for a time of day, e.g. "06:30" or "6:30 AM".
    Next { time: WallClockTime },

    /// Trigger for a snooze of MINUTES from now.
    Snooze { minutes: Option<u32> },

    /// Hours and minutes between two epoch-millisecond instants.
    Countdown { from_ms: i64, until_ms: i64 },

    /// Hour, minute and meridiem of an epoch-millisecond instant here.
    Fields { instant_ms: i64 },
}

fn main() -> Result<()> {
    qr_alarm::tracing::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    debug!(?config, "Configuration loaded");
    let alarms = AlarmClock::new(SystemClock);

    match cli.command {
        Command::Next { time } => {
            let at = alarms.next_trigger(time)?;
            print_trigger(cli.json, at, alarms.countdown_until(at))?;
        }
        Command::Snooze { minutes } => {
            let minutes = minutes.unwrap_or(config.default_snooze_minutes);
            let at = alarms.snooze_trigger(minutes)?;
            print_trigger(cli.json, at, alarms.countdown_until(at))?;
        }
        Command::Countdown { from_ms, until_ms } => {
            let countdown = Countdown::between(EpochMillis::new(from_ms), EpochMillis::new(until_ms));
            if cli.json {
                println!("{}", serde_json::to_string(&countdown)?);
            } else {
                println!("{countdown}");
            }
        }
        Command::Fields { instant_ms } => {
            let instant = EpochMillis::new(instant_ms);
            let hour = alarms.hour_of(instant, config.time_format)?;
            let minute = alarms.minute_of(instant)?;
            let meridiem = alarms.meridiem_of(instant)?;
            if cli.json {
                let fields = json!({ "hour": hour, "minute": minute, "meridiem": meridiem });
                println!("{fields}");
            } else {
                match config.time_format {
                    TimeFormat::Military => println!("{hour:02}:{minute:02}"),
                    TimeFormat::AmPm => println!("{hour}:{minute:02} {meridiem}"),
                }
            }
        }
    }

    Ok(())
}

/// Defaults, overridden by flags or their environment variables.
fn load_config(cli: &Cli) -> Result<AlarmConfig> {
    let mut config = AlarmConfig::default();
    if let Some(format) = cli.time_format {
        config.time_format = format;
    }
    if let Some(minutes) = cli.snooze_minutes {
        config.default_snooze_minutes = minutes;
    }
    config.validate().context("invalid alarm configuration")?;
    Ok(config)
}

fn print_trigger(as_json: bool, at: EpochMillis, countdown: Countdown) -> Result<()> {
    let local = at
        .to_zoned(&Local)
        .context("trigger instant is outside the representable range")?;

    if as_json {
        let out = json!({
            "at_ms": at,
            "local": local.to_rfc3339(),
            "countdown": countdown,
        });
        println!("{out}");
    } else {
        println!("Trigger:  {}", local.format("%Y-%m-%d %H:%M %:z"));
        println!("Epoch:    {}", at.as_millis());
        println!("Rings in: {countdown}");
    }
    Ok(())
}
