//! # Message Components
//!
//! The mark-done button attached to every reminder and the router that turns
//! button presses into acknowledgements.

use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};
use serenity::builder::CreateComponents;
use serenity::model::application::component::ButtonStyle;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

use crate::channel::{DiscordChannel, MessageRef};
use crate::features::tether::{AckHandler, AckOutcome, Acknowledgement, PairingLedger, RecipientPair};

/// Custom id of the mark-done button attached to every reminder
pub const DONE_BUTTON_ID: &str = "todo_done";

/// Create the single-action control row attached to reminder messages
pub fn create_done_button() -> CreateComponents {
    CreateComponents::default()
        .create_action_row(|row| {
            row.create_button(|button| {
                button
                    .custom_id(DONE_BUTTON_ID)
                    .label("✅ Done")
                    .style(ButtonStyle::Success)
            })
        })
        .to_owned()
}

/// Handler for all message component interactions
pub struct MessageComponentHandler {
    recipients: RecipientPair,
    ledger: Arc<PairingLedger>,
}

impl MessageComponentHandler {
    pub fn new(recipients: RecipientPair, ledger: Arc<PairingLedger>) -> Self {
        Self { recipients, ledger }
    }

    /// Handle all types of component interactions
    pub async fn handle_component_interaction(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
    ) -> Result<()> {
        let custom_id = &interaction.data.custom_id;
        info!(
            "Processing component interaction: {custom_id} from user: {}",
            interaction.user.id
        );

        match custom_id.as_str() {
            DONE_BUTTON_ID => {
                self.handle_done(ctx, interaction).await?;
            }
            _ => {
                interaction
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                message.content("Unknown component interaction.")
                            })
                    })
                    .await?;
            }
        }

        Ok(())
    }

    /// Route a mark-done press to the acknowledgement handler
    async fn handle_done(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
    ) -> Result<()> {
        // Acknowledge immediately; the reminder message itself is edited by
        // the disable fan-out, not by this response.
        interaction
            .create_interaction_response(&ctx.http, |response| {
                response.kind(InteractionResponseType::DeferredUpdateMessage)
            })
            .await?;

        let ack = Acknowledgement {
            actor_display_name: interaction.user.name.clone(),
            message_ref: MessageRef {
                channel_id: interaction.channel_id.0,
                message_id: interaction.message.id.0,
            },
        };

        let handler = AckHandler::new(
            DiscordChannel::new(ctx.http.clone()),
            self.recipients.clone(),
            self.ledger.clone(),
        );

        match handler.handle(&ack).await {
            AckOutcome::Completed { by } => info!("activity completed by {by}"),
            AckOutcome::AlreadyResolved => {
                info!("mark-done press ignored; event already resolved")
            }
            AckOutcome::UnknownRecipient => warn!(
                "mark-done press from unconfigured channel {}",
                ack.message_ref.channel_id
            ),
        }

        Ok(())
    }
}
