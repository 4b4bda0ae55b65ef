// Core layer - shared types and configuration
pub mod core;

// Messaging layer - channel abstraction over the Discord API
pub mod channel;

// Features layer - all feature modules
pub mod features;

// UI components
pub mod message_components;

// Re-export core config for convenience
pub use core::Config;

// Re-export channel items
pub use channel::{DiscordChannel, MessageChannel, MessageRef};

// Re-export feature items
pub use features::{
    // Tethered reminders
    AckHandler, AckOutcome, Acknowledgement, DeliveryReport, PairingLedger, Recipient,
    RecipientPair, ReminderNotifier, Side,
    // Scheduling
    ReminderScheduler,
    // Startup
    StartupNotifier,
};
