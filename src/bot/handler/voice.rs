use serenity::all::{Context, VoiceState};

use crate::bot::handler::log_event;
use crate::model::audit::{Actor, AuditEvent};
use crate::state::BotState;

/// Handles the voice_state_update event.
///
/// The previous state is only known when the member's voice state was cached, so a
/// missing `old` is treated as "not in a voice channel".
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context used to post the audit notification
/// - `old` - Cached voice state before the update, if any
/// - `new` - Voice state after the update
pub async fn handle_voice_state_update(
    state: &BotState,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        tracing::debug!("Ignoring voice state update outside a guild");
        return;
    };

    let member = new
        .member
        .as_ref()
        .map(|member| Actor::from(&member.user))
        .unwrap_or_else(|| Actor::from_id(new.user_id.get()));

    let event = AuditEvent::VoiceStateUpdated {
        guild_id: guild_id.get(),
        member,
        before_channel: old.and_then(|old| old.channel_id).map(|id| id.get()),
        after_channel: new.channel_id.map(|id| id.get()),
    };

    log_event(state, &ctx, event).await;
}
