//! Environment-driven startup configuration.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{bail, Context, Result};
use chrono::NaiveTime;

use crate::features::tether::{Recipient, RecipientPair};

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub recipient_a: Recipient,
    pub recipient_b: Recipient,
    /// Text of the daily activity reminder.
    pub activity_text: String,
    /// Local wall-clock time the daily reminder fires.
    pub reminder_time: NaiveTime,
    pub startup_notification: bool,
    pub log_level: String,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let discord_token = require("DISCORD_TOKEN")?;

        let recipient_a = Recipient {
            channel_id: parse_channel_id("RECIPIENT_A_CHANNEL_ID")?,
            display_name: require("RECIPIENT_A_NAME")?,
        };
        let recipient_b = Recipient {
            channel_id: parse_channel_id("RECIPIENT_B_CHANNEL_ID")?,
            display_name: require("RECIPIENT_B_NAME")?,
        };
        if recipient_a.channel_id == recipient_b.channel_id {
            bail!("RECIPIENT_A_CHANNEL_ID and RECIPIENT_B_CHANNEL_ID must differ");
        }

        let activity_text =
            std::env::var("ACTIVITY_TEXT").unwrap_or_else(|_| "Feed cat".to_string());

        let reminder_time = parse_reminder_time(
            &std::env::var("REMINDER_TIME").unwrap_or_else(|_| "08:00".to_string()),
        )?;

        let startup_notification = std::env::var("STARTUP_NOTIFICATION")
            .map(|v| v == "enabled")
            .unwrap_or(false);

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            discord_token,
            recipient_a,
            recipient_b,
            activity_text,
            reminder_time,
            startup_notification,
            log_level,
        })
    }

    /// The two configured recipients as a typed pair.
    pub fn recipients(&self) -> RecipientPair {
        RecipientPair::new(self.recipient_a.clone(), self.recipient_b.clone())
    }
}

fn require(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} is not set"))
}

fn parse_channel_id(name: &str) -> Result<u64> {
    require(name)?
        .parse::<u64>()
        .with_context(|| format!("{name} is not a valid channel id"))
}

/// Parse a `HH:MM` local wall-clock time.
fn parse_reminder_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .with_context(|| format!("invalid REMINDER_TIME '{value}', expected HH:MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reminder_time() {
        let time = parse_reminder_time("08:30").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_reminder_time_midnight() {
        let time = parse_reminder_time("00:00").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_reminder_time_rejects_garbage() {
        assert!(parse_reminder_time("8am").is_err());
        assert!(parse_reminder_time("25:00").is_err());
        assert!(parse_reminder_time("").is_err());
    }
}
