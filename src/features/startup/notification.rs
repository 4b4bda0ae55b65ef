//! # Feature: Startup Notification
//!
//! Sends a short online notice to both recipients when the bot first comes
//! online, so the household knows reminders are flowing again.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: true

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{info, warn};
use serenity::http::Http;
use serenity::model::gateway::Ready;

use crate::channel::{DiscordChannel, MessageChannel};
use crate::features::get_bot_version;
use crate::features::tether::RecipientPair;

/// Tracks whether this is the first Ready event (vs reconnect)
static FIRST_READY: AtomicBool = AtomicBool::new(true);

/// Handles sending the online notice to the configured recipients.
pub struct StartupNotifier {
    recipients: RecipientPair,
    enabled: bool,
}

impl StartupNotifier {
    pub fn new(recipients: RecipientPair, enabled: bool) -> Self {
        Self {
            recipients,
            enabled,
        }
    }

    /// Sends the online notice if enabled and this is the first Ready event.
    pub async fn send_if_enabled(&self, http: &Arc<Http>, ready: &Ready) {
        // Only send on first Ready (not reconnects)
        if !FIRST_READY.swap(false, Ordering::SeqCst) {
            info!("Skipping startup notification (reconnect, not initial startup)");
            return;
        }

        if !self.enabled {
            info!("Startup notifications disabled");
            return;
        }

        let channel = DiscordChannel::new(http.clone());
        let notice = format!("{} v{} is online", ready.user.name, get_bot_version());

        for recipient in [&self.recipients.a, &self.recipients.b] {
            if let Err(e) = channel.send_notice(recipient.channel_id, &notice).await {
                warn!(
                    "Failed to send startup notice to {}: {e:#}",
                    recipient.display_name
                );
            }
        }
    }
}
