//! Dual delivery of the daily activity reminder.

use std::sync::Arc;

use anyhow::Result;
use log::{error, info, warn};
use uuid::Uuid;

use crate::channel::{MessageChannel, MessageRef};

use super::ledger::PairingLedger;
use super::recipients::RecipientPair;

/// Outcome of one reminder fan-out, one result per recipient.
#[derive(Debug)]
pub struct DeliveryReport {
    pub to_a: Result<MessageRef>,
    pub to_b: Result<MessageRef>,
}

impl DeliveryReport {
    /// True when both copies were delivered and the pairing was registered.
    pub fn tethered(&self) -> bool {
        self.to_a.is_ok() && self.to_b.is_ok()
    }
}

/// Sends the activity reminder to both recipients and tethers the resulting
/// message pair in the ledger.
pub struct ReminderNotifier<C> {
    channel: C,
    recipients: RecipientPair,
    ledger: Arc<PairingLedger>,
}

impl<C: MessageChannel> ReminderNotifier<C> {
    pub fn new(channel: C, recipients: RecipientPair, ledger: Arc<PairingLedger>) -> Self {
        Self {
            channel,
            recipients,
            ledger,
        }
    }

    /// Deliver `text` with the mark-done control to both recipients.
    ///
    /// Both sends are attempted regardless of the other's outcome, and both
    /// outcomes are surfaced in the report. The pair is recorded only when
    /// both sends succeed; a partially delivered event is discarded and can
    /// never be acknowledged.
    pub async fn send_reminder(&self, text: &str) -> DeliveryReport {
        let event_id = Uuid::new_v4();
        info!("sending reminder {event_id} to both recipients");

        let (to_a, to_b) = tokio::join!(
            self.channel
                .send_actionable(self.recipients.a.channel_id, text),
            self.channel
                .send_actionable(self.recipients.b.channel_id, text),
        );

        match (&to_a, &to_b) {
            (Ok(ref_a), Ok(ref_b)) => {
                if self.ledger.record(*ref_a, *ref_b) {
                    info!("reminder {event_id} tethered: {ref_a:?} <-> {ref_b:?}");
                }
            }
            (Err(e), Ok(_)) => {
                error!(
                    "reminder {event_id} not delivered to {}: {e:#}",
                    self.recipients.a.display_name
                );
                warn!("reminder {event_id} partially delivered; discarding event");
            }
            (Ok(_), Err(e)) => {
                error!(
                    "reminder {event_id} not delivered to {}: {e:#}",
                    self.recipients.b.display_name
                );
                warn!("reminder {event_id} partially delivered; discarding event");
            }
            (Err(e_a), Err(e_b)) => {
                error!("reminder {event_id} not delivered to either recipient: {e_a:#} / {e_b:#}");
            }
        }

        DeliveryReport { to_a, to_b }
    }
}
