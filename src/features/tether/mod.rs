//! # Tethered Reminders Feature
//!
//! Dual-notification reconciliation core. Every daily reminder is delivered
//! twice, once per recipient; the two copies are tethered in the pairing
//! ledger, and either copy's mark-done acknowledgement completes both.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod handler;
pub mod ledger;
pub mod notifier;
pub mod recipients;

pub use handler::{AckHandler, AckOutcome, Acknowledgement};
pub use ledger::PairingLedger;
pub use notifier::{DeliveryReport, ReminderNotifier};
pub use recipients::{Recipient, RecipientPair, Side};
