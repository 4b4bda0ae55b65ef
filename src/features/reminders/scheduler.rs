//! Daily reminder trigger.
//!
//! Fires the activity reminder once per day at the configured local time.
//! At most one live reminder event exists per day; yesterday's event is
//! simply superseded by today's fresh message pair.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime};
use log::{info, warn};
use serenity::http::Http;

use crate::channel::DiscordChannel;
use crate::features::tether::{PairingLedger, RecipientPair, ReminderNotifier};

/// Spawned once at startup; loops forever sending the daily reminder.
pub struct ReminderScheduler {
    recipients: RecipientPair,
    ledger: Arc<PairingLedger>,
    activity_text: String,
    fire_at: NaiveTime,
}

impl ReminderScheduler {
    pub fn new(
        recipients: RecipientPair,
        ledger: Arc<PairingLedger>,
        activity_text: String,
        fire_at: NaiveTime,
    ) -> Self {
        Self {
            recipients,
            ledger,
            activity_text,
            fire_at,
        }
    }

    /// Run the scheduler loop. Never returns.
    pub async fn run(self, http: Arc<Http>) {
        info!(
            "Reminder scheduler started; firing daily at {}",
            self.fire_at
        );
        let notifier = ReminderNotifier::new(
            DiscordChannel::new(http),
            self.recipients.clone(),
            self.ledger.clone(),
        );

        loop {
            let wait = delay_until_next_fire(Local::now().naive_local(), self.fire_at);
            info!("next reminder in {}s", wait.as_secs());
            tokio::time::sleep(wait).await;

            let report = notifier.send_reminder(&self.activity_text).await;
            if !report.tethered() {
                warn!("daily reminder was not fully delivered");
            }
        }
    }
}

/// Time until the next occurrence of `fire_at`, strictly in the future.
fn delay_until_next_fire(now: NaiveDateTime, fire_at: NaiveTime) -> Duration {
    let mut next = now.date().and_time(fire_at);
    if next <= now {
        next += chrono::Duration::days(1);
    }
    (next - now).to_std().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_fire_later_today() {
        let wait = delay_until_next_fire(at(7, 0), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(wait.as_secs(), 3600);
    }

    #[test]
    fn test_fire_time_already_passed_rolls_to_tomorrow() {
        let wait = delay_until_next_fire(at(9, 0), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(wait.as_secs(), 23 * 3600);
    }

    #[test]
    fn test_fire_time_exactly_now_rolls_to_tomorrow() {
        let wait = delay_until_next_fire(at(8, 0), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(wait.as_secs(), 24 * 3600);
    }
}
