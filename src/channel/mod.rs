//! # Messaging Channel
//!
//! Outbound messaging seam. The reconciliation core talks to Discord only
//! through [`MessageChannel`], so tests drive it with an in-memory mock.

pub mod discord;

pub use discord::DiscordChannel;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

/// A stable reference to a delivered message, scoped to (recipient, message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub channel_id: u64,
    pub message_id: u64,
}

/// Outbound messaging operations needed by the reminder core.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Send `text` with the mark-done control attached.
    async fn send_actionable(&self, recipient: u64, text: &str) -> Result<MessageRef>;

    /// Send a plain notice with no controls.
    async fn send_notice(&self, recipient: u64, text: &str) -> Result<MessageRef>;

    /// Remove the action controls from a previously delivered message.
    async fn disable_action(&self, message: MessageRef) -> Result<()>;
}

#[async_trait]
impl<C: MessageChannel + ?Sized> MessageChannel for Arc<C> {
    async fn send_actionable(&self, recipient: u64, text: &str) -> Result<MessageRef> {
        (**self).send_actionable(recipient, text).await
    }

    async fn send_notice(&self, recipient: u64, text: &str) -> Result<MessageRef> {
        (**self).send_notice(recipient, text).await
    }

    async fn disable_action(&self, message: MessageRef) -> Result<()> {
        (**self).disable_action(message).await
    }
}
