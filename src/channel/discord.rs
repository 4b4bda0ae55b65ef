//! Discord-backed implementation of the messaging channel.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};

use crate::message_components::create_done_button;

use super::{MessageChannel, MessageRef};

/// Sends reminders and notices through the Discord REST API.
pub struct DiscordChannel {
    http: Arc<Http>,
}

impl DiscordChannel {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MessageChannel for DiscordChannel {
    async fn send_actionable(&self, recipient: u64, text: &str) -> Result<MessageRef> {
        let msg = ChannelId(recipient)
            .send_message(&self.http, |m| {
                m.content(text).set_components(create_done_button())
            })
            .await
            .with_context(|| format!("sending reminder to channel {recipient}"))?;

        Ok(MessageRef {
            channel_id: recipient,
            message_id: msg.id.0,
        })
    }

    async fn send_notice(&self, recipient: u64, text: &str) -> Result<MessageRef> {
        let msg = ChannelId(recipient)
            .say(&self.http, text)
            .await
            .with_context(|| format!("sending notice to channel {recipient}"))?;

        Ok(MessageRef {
            channel_id: recipient,
            message_id: msg.id.0,
        })
    }

    async fn disable_action(&self, message: MessageRef) -> Result<()> {
        ChannelId(message.channel_id)
            .edit_message(&self.http, MessageId(message.message_id), |m| {
                m.components(|c| c) // Clear components
            })
            .await
            .with_context(|| {
                format!(
                    "clearing controls on message {} in channel {}",
                    message.message_id, message.channel_id
                )
            })?;

        Ok(())
    }
}
