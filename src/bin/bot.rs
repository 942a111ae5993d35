use anyhow::Result;
use chrono::Utc;
use dotenvy::dotenv;
use log::{debug, error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use custompoll::commands::{register_global_commands, register_guild_commands};
use custompoll::core::Config;
use custompoll::discord::{describe, inbound_interaction, SerenityPlatform};
use custompoll::features::polls::{InMemoryPollStore, InboundInteraction, InteractionRouter, PollStore};
use custompoll::health;

struct Handler {
    router: Arc<InteractionRouter>,
    guild_id: Option<GuildId>,
}

impl Handler {
    fn new(router: InteractionRouter, guild_id: Option<GuildId>) -> Self {
        Handler {
            router: Arc::new(router),
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Overwrites the whole command set, so this is safe on every reconnect
        let registration = match self.guild_id {
            Some(guild_id) => register_guild_commands(&ctx, guild_id).await,
            None => register_global_commands(&ctx).await,
        };
        if let Err(e) = registration {
            error!("Error registering commands: {e}");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let inbound = inbound_interaction(&interaction);
        if inbound == InboundInteraction::Other {
            debug!("Ignoring unhandled interaction");
            return;
        }

        let description = describe(&inbound);
        info!("Processing {description}");

        let platform = SerenityPlatform::new(&ctx, &interaction);
        if let Err(e) = self.router.route(&platform, inbound).await {
            error!("Error handling {description}: {e:#}");
        }
    }
}

/// Periodically drop expired polls so the store stays bounded
fn spawn_poll_sweeper(store: Arc<dyn PollStore>, interval: std::time::Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let purged = store.purge_expired(Utc::now());
            if purged > 0 {
                info!("🧹 Purged {purged} expired polls ({} still open)", store.len());
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting custom poll bot...");

    health::spawn(config.port);

    let store: Arc<dyn PollStore> = Arc::new(InMemoryPollStore::new());
    spawn_poll_sweeper(Arc::clone(&store), config.sweep_interval);

    let router = InteractionRouter::new(store, config.default_results_channel);
    match config.default_results_channel {
        Some(channel) => info!("Default results channel: {channel}"),
        None => info!("No default results channel; polls must name one"),
    }

    let handler = Handler::new(router, config.discord_guild_id.map(GuildId));

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    // Build the Discord client with proper gateway configuration
    let mut builder = Client::builder(&config.discord_token, intents).event_handler(handler);
    if let Some(application_id) = config.application_id {
        builder = builder.application_id(application_id);
    }
    let mut client = builder.await.map_err(|e| {
        error!("Failed to create Discord client: {e}");
        error!("This could indicate:");
        error!("  - Invalid bot token format");
        error!("  - Network issues reaching Discord API");
        anyhow::anyhow!("Client creation failed: {}", e)
    })?;

    info!("Establishing WebSocket connection to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Discord API outage");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
