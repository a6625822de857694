use serenity::all::{Client, GatewayIntents};
use serenity::cache::Settings as CacheSettings;
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::state::BotState;

/// Number of recent messages kept per channel so edits and deletes can be described.
const CACHED_MESSAGES_PER_CHANNEL: usize = 500;

/// Client data key for the shard manager, read by `/stats` for gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// Builds the Discord client with the event handler attached.
///
/// # Arguments
/// - `state` - Shared bot state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to connect to the gateway
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(state: BotState) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_VOICE_STATES;

    let mut cache_settings = CacheSettings::default();
    cache_settings.max_messages = CACHED_MESSAGES_PER_CHANNEL;

    let token = state.config.discord_token.clone();
    let handler = Handler::new(state);

    let client = Client::builder(&token, intents)
        .cache_settings(cache_settings)
        .event_handler(handler)
        .await?;

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
    }

    Ok(client)
}

/// Connects to the gateway and processes events until shutdown.
///
/// # Arguments
/// - `client` - Client built by [`init_bot`]
///
/// # Returns
/// - `Ok(())` if the bot shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
