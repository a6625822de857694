//! Message edit and delete events.
//!
//! Discord only sends ids for deletions and partial data for edits, so both handlers
//! rely on the message cache configured in `bot::start` to describe what changed.

use serenity::all::{ChannelId, Context, GuildId, Message, MessageId, MessageUpdateEvent};

use crate::bot::handler::log_event;
use crate::model::audit::{Actor, AuditEvent};
use crate::state::BotState;

/// Handles the message_update event.
///
/// Edits of messages that were not cached are ignored because the previous text is
/// unknown.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context used to post the audit notification
/// - `old_if_available` - Cached message before the edit
/// - `new` - Cached message after the edit
/// - `event` - Raw update payload
pub async fn handle_message_update(
    state: &BotState,
    ctx: Context,
    old_if_available: Option<Message>,
    new: Option<Message>,
    event: MessageUpdateEvent,
) {
    let Some(guild_id) = event.guild_id else {
        return;
    };

    let Some(old) = old_if_available else {
        tracing::debug!(
            "Ignoring edit of uncached message {} in guild {}",
            event.id,
            guild_id
        );
        return;
    };

    let author = event
        .author
        .as_ref()
        .map(Actor::from)
        .unwrap_or_else(|| Actor::from(&old.author));

    let after = new.map(|message| message.content).or(event.content);

    let event = AuditEvent::MessageEdited {
        guild_id: guild_id.get(),
        channel_id: event.channel_id.get(),
        author,
        before: Some(old.content),
        after,
    };

    log_event(state, &ctx, event).await;
}

/// Handles the message_delete event.
///
/// Author and content are read from the message cache; uncached deletions are still
/// reported without them.
pub async fn handle_message_delete(
    state: &BotState,
    ctx: Context,
    channel_id: ChannelId,
    deleted_message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    let Some(guild_id) = guild_id else {
        return;
    };

    let cached = ctx
        .cache
        .message(channel_id, deleted_message_id)
        .map(|message| (Actor::from(&message.author), message.content.clone()));

    let (author, content) = match cached {
        Some((author, content)) => (Some(author), Some(content)),
        None => (None, None),
    };

    let event = AuditEvent::MessageDeleted {
        guild_id: guild_id.get(),
        channel_id: channel_id.get(),
        author,
        content,
    };

    log_event(state, &ctx, event).await;
}
