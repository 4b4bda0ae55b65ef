//! # Reminders Feature
//!
//! Daily scheduled delivery of the household activity reminder.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true

pub mod scheduler;

pub use scheduler::ReminderScheduler;
