//! # Features Module
//!
//! Feature modules and the feature version registry.

pub mod reminders;
pub mod startup;
pub mod tether;

// Re-export feature items
pub use reminders::ReminderScheduler;
pub use startup::StartupNotifier;
pub use tether::{
    AckHandler, AckOutcome, Acknowledgement, DeliveryReport, PairingLedger, Recipient,
    RecipientPair, ReminderNotifier, Side,
};

/// Version metadata for one feature module.
pub struct FeatureInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub toggleable: bool,
}

/// Crate version from Cargo.toml.
pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// All feature modules with their versions.
pub fn get_features() -> Vec<FeatureInfo> {
    vec![
        FeatureInfo {
            name: "Tethered Reminders",
            version: "1.0.0",
            toggleable: false,
        },
        FeatureInfo {
            name: "Reminder Scheduler",
            version: "1.0.0",
            toggleable: true,
        },
        FeatureInfo {
            name: "Startup Notification",
            version: "1.0.0",
            toggleable: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_registry_is_populated() {
        let features = get_features();
        assert!(!features.is_empty());
        assert!(features.iter().any(|f| f.name == "Tethered Reminders"));
    }

    #[test]
    fn test_bot_version_is_set() {
        assert!(!get_bot_version().is_empty());
    }
}
