//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Restores the
//! presence stored by `/set_bio` and registers the slash commands of every loaded
//! module.

use serenity::all::{Context, OnlineStatus, Ready};

use crate::bot::command;
use crate::service::customisation::CustomisationService;
use crate::state::BotState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for setting the presence and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match CustomisationService::new(&state.db).stored_presence().await {
        Ok(Some((kind, bio))) => {
            ctx.set_presence(Some(kind.activity(&bio)), OnlineStatus::Online);
            tracing::info!("Restored presence: {} '{}'", kind, bio);
        }
        Ok(None) => {}
        Err(e) => tracing::error!("Failed to restore presence: {}", e),
    }

    if let Err(e) = command::register_commands(state, &ctx).await {
        tracing::error!("Failed to register commands: {}", e);
    }
}
