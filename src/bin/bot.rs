use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use chorebot::core::Config;
use chorebot::features::{get_features, PairingLedger, ReminderScheduler, StartupNotifier};
use chorebot::message_components::MessageComponentHandler;

struct Handler {
    component_handler: Arc<MessageComponentHandler>,
    startup_notifier: StartupNotifier,
}

impl Handler {
    fn new(component_handler: MessageComponentHandler, startup_notifier: StartupNotifier) -> Self {
        Handler {
            component_handler: Arc::new(component_handler),
            startup_notifier,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("🤖 Bot ID: {}", ready.user.id);
        info!("🌐 Gateway version: {}", ready.version);

        let features = get_features();
        info!("🔌 {} features loaded", features.len());
        for feature in &features {
            info!("   - {} v{}", feature.name, feature.version);
        }

        // Send startup notification if enabled
        self.startup_notifier.send_if_enabled(&ctx.http, &ready).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::MessageComponent(component) = interaction {
            if let Err(e) = self
                .component_handler
                .handle_component_interaction(&ctx, &component)
                .await
            {
                error!(
                    "Error handling component interaction '{}': {}",
                    component.data.custom_id, e
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting chorebot...");

    let ledger = Arc::new(PairingLedger::new());
    let recipients = config.recipients();

    let component_handler = MessageComponentHandler::new(recipients.clone(), ledger.clone());
    let startup_notifier = StartupNotifier::new(recipients.clone(), config.startup_notification);
    let handler = Handler::new(component_handler, startup_notifier);

    let intents = GatewayIntents::GUILDS | GatewayIntents::DIRECT_MESSAGES;

    // Build the Discord client with proper gateway configuration
    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            error!("This could indicate:");
            error!("  - Invalid bot token format");
            error!("  - Network issues reaching Discord API");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    // Start the daily reminder scheduler
    let scheduler = ReminderScheduler::new(
        recipients,
        ledger,
        config.activity_text.clone(),
        config.reminder_time,
    );
    let http = client.cache_and_http.http.clone();
    tokio::spawn(async move {
        scheduler.run(http).await;
    });

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Missing required permissions");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
