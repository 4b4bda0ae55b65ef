//! Acknowledgement reconciliation.
//!
//! When either recipient marks the activity done, the counterpart message is
//! looked up in the ledger, the controls on both copies are disabled, and
//! both recipients are told who completed it.

use std::sync::Arc;

use log::{error, info, warn};

use crate::channel::{MessageChannel, MessageRef};

use super::ledger::PairingLedger;
use super::recipients::RecipientPair;

/// An inbound mark-done action from one recipient's reminder message.
#[derive(Debug, Clone)]
pub struct Acknowledgement {
    pub actor_display_name: String,
    pub message_ref: MessageRef,
}

/// What handling an acknowledgement amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AckOutcome {
    /// First acknowledgement for a live event; both controls disabled and
    /// both recipients notified.
    Completed { by: String },
    /// The referenced event was already completed, or was never tethered
    /// (e.g. a press that survived a restart). Benign no-op.
    AlreadyResolved,
    /// The acknowledgement came from a channel matching neither recipient.
    /// Rejected rather than attributed to anyone.
    UnknownRecipient,
}

/// Resolves mark-done acknowledgements against the pairing ledger and runs
/// the dual disable/notice fan-out.
pub struct AckHandler<C> {
    channel: C,
    recipients: RecipientPair,
    ledger: Arc<PairingLedger>,
}

impl<C: MessageChannel> AckHandler<C> {
    pub fn new(channel: C, recipients: RecipientPair, ledger: Arc<PairingLedger>) -> Self {
        Self {
            channel,
            recipients,
            ledger,
        }
    }

    /// Handle one acknowledgement.
    ///
    /// Stale, replayed, and misaddressed acknowledgements are no-ops. The
    /// disable and notice calls are independent and non-transactional; a
    /// failed call is logged and the rest of the fan-out still runs.
    pub async fn handle(&self, ack: &Acknowledgement) -> AckOutcome {
        let side = match self.recipients.identify(ack.message_ref.channel_id) {
            Some(side) => side,
            None => {
                warn!(
                    "acknowledgement from unconfigured channel {}; ignoring",
                    ack.message_ref.channel_id
                );
                return AckOutcome::UnknownRecipient;
            }
        };

        let counterpart = match self.ledger.claim(ack.message_ref) {
            Some(counterpart) => counterpart,
            None => {
                info!(
                    "acknowledgement for untracked message {:?}; event already resolved",
                    ack.message_ref
                );
                return AckOutcome::AlreadyResolved;
            }
        };

        info!(
            "{} marked the activity done via {:?}",
            ack.actor_display_name, ack.message_ref
        );

        for reference in [ack.message_ref, counterpart] {
            if let Err(e) = self.channel.disable_action(reference).await {
                error!("failed to clear controls on {reference:?}: {e:#}");
            }
        }

        let notice = format!("Done by {}", ack.actor_display_name);
        for recipient in [self.recipients.get(side), self.recipients.get(side.other())] {
            if let Err(e) = self.channel.send_notice(recipient.channel_id, &notice).await {
                error!("failed to notify {}: {e:#}", recipient.display_name);
            }
        }

        AckOutcome::Completed {
            by: ack.actor_display_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::testing::MockChannel;
    use crate::features::tether::recipients::Recipient;

    const ALICE_CHANNEL: u64 = 100;
    const BOB_CHANNEL: u64 = 200;

    fn recipients() -> RecipientPair {
        RecipientPair::new(
            Recipient {
                channel_id: ALICE_CHANNEL,
                display_name: "Alice".to_string(),
            },
            Recipient {
                channel_id: BOB_CHANNEL,
                display_name: "Bob".to_string(),
            },
        )
    }

    fn mref(channel_id: u64, message_id: u64) -> MessageRef {
        MessageRef {
            channel_id,
            message_id,
        }
    }

    fn ack_from(name: &str, message_ref: MessageRef) -> Acknowledgement {
        Acknowledgement {
            actor_display_name: name.to_string(),
            message_ref,
        }
    }

    fn handler(
        channel: &Arc<MockChannel>,
        ledger: &Arc<PairingLedger>,
    ) -> AckHandler<Arc<MockChannel>> {
        AckHandler::new(channel.clone(), recipients(), ledger.clone())
    }

    #[tokio::test]
    async fn test_ack_disables_both_and_notifies_both() {
        let channel = Arc::new(MockChannel::new());
        let ledger = Arc::new(PairingLedger::new());
        let m1 = mref(ALICE_CHANNEL, 1);
        let m2 = mref(BOB_CHANNEL, 2);
        ledger.record(m1, m2);

        let outcome = handler(&channel, &ledger)
            .handle(&ack_from("Bob", m2))
            .await;

        assert_eq!(
            outcome,
            AckOutcome::Completed {
                by: "Bob".to_string()
            }
        );
        let disabled = channel.disabled_refs();
        assert_eq!(disabled.len(), 2);
        assert!(disabled.contains(&m1));
        assert!(disabled.contains(&m2));
        assert_eq!(channel.notices_to(ALICE_CHANNEL), vec!["Done by Bob"]);
        assert_eq!(channel.notices_to(BOB_CHANNEL), vec!["Done by Bob"]);
    }

    #[tokio::test]
    async fn test_replay_is_a_noop() {
        let channel = Arc::new(MockChannel::new());
        let ledger = Arc::new(PairingLedger::new());
        let m1 = mref(ALICE_CHANNEL, 1);
        let m2 = mref(BOB_CHANNEL, 2);
        ledger.record(m1, m2);

        let handler = handler(&channel, &ledger);
        handler.handle(&ack_from("Bob", m2)).await;

        // Replay from either side of the completed event.
        assert_eq!(
            handler.handle(&ack_from("Bob", m2)).await,
            AckOutcome::AlreadyResolved
        );
        assert_eq!(
            handler.handle(&ack_from("Alice", m1)).await,
            AckOutcome::AlreadyResolved
        );

        assert_eq!(channel.disabled_refs().len(), 2);
        assert_eq!(channel.notices_to(ALICE_CHANNEL).len(), 1);
        assert_eq!(channel.notices_to(BOB_CHANNEL).len(), 1);
    }

    #[tokio::test]
    async fn test_untracked_reference_is_a_noop() {
        let channel = Arc::new(MockChannel::new());
        let ledger = Arc::new(PairingLedger::new());

        let outcome = handler(&channel, &ledger)
            .handle(&ack_from("Alice", mref(ALICE_CHANNEL, 7)))
            .await;

        assert_eq!(outcome, AckOutcome::AlreadyResolved);
        assert!(channel.disabled_refs().is_empty());
        assert!(channel.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_recipient_is_rejected() {
        let channel = Arc::new(MockChannel::new());
        let ledger = Arc::new(PairingLedger::new());
        let m1 = mref(ALICE_CHANNEL, 1);
        let m2 = mref(BOB_CHANNEL, 2);
        ledger.record(m1, m2);

        let outcome = handler(&channel, &ledger)
            .handle(&ack_from("Mallory", mref(999, 1)))
            .await;

        assert_eq!(outcome, AckOutcome::UnknownRecipient);
        assert!(channel.disabled_refs().is_empty());
        assert!(channel.sent.lock().unwrap().is_empty());
        // The live event is untouched.
        assert_eq!(ledger.resolve(m1), Some(m2));
    }

    #[tokio::test]
    async fn test_disable_failure_does_not_abort_fanout() {
        let channel = Arc::new(MockChannel::new());
        channel.fail_disables_on(ALICE_CHANNEL);
        let ledger = Arc::new(PairingLedger::new());
        let m1 = mref(ALICE_CHANNEL, 1);
        let m2 = mref(BOB_CHANNEL, 2);
        ledger.record(m1, m2);

        let outcome = handler(&channel, &ledger)
            .handle(&ack_from("Bob", m2))
            .await;

        assert_eq!(
            outcome,
            AckOutcome::Completed {
                by: "Bob".to_string()
            }
        );
        // Only Bob's copy could be disabled, but both notices still went out.
        assert_eq!(channel.disabled_refs(), vec![m2]);
        assert_eq!(channel.notices_to(ALICE_CHANNEL), vec!["Done by Bob"]);
        assert_eq!(channel.notices_to(BOB_CHANNEL), vec!["Done by Bob"]);
    }

    #[tokio::test]
    async fn test_simultaneous_acks_produce_one_notice_pair() {
        let channel = Arc::new(MockChannel::new());
        let ledger = Arc::new(PairingLedger::new());
        let m1 = mref(ALICE_CHANNEL, 1);
        let m2 = mref(BOB_CHANNEL, 2);
        ledger.record(m1, m2);

        let handler = handler(&channel, &ledger);
        let ack_alice = ack_from("Alice", m1);
        let ack_bob = ack_from("Bob", m2);
        let (first, second) = tokio::join!(
            handler.handle(&ack_alice),
            handler.handle(&ack_bob),
        );

        let completions = [&first, &second]
            .iter()
            .filter(|o| matches!(o, AckOutcome::Completed { .. }))
            .count();
        assert_eq!(completions, 1);
        assert_eq!(channel.disabled_refs().len(), 2);
        assert_eq!(channel.notices_to(ALICE_CHANNEL).len(), 1);
        assert_eq!(channel.notices_to(BOB_CHANNEL).len(), 1);

        // Both notices attribute whoever won the race.
        let winner = match (&first, &second) {
            (AckOutcome::Completed { by }, _) | (_, AckOutcome::Completed { by }) => by.clone(),
            _ => unreachable!(),
        };
        assert_eq!(channel.notices_to(ALICE_CHANNEL), vec![format!("Done by {winner}")]);
    }
}
