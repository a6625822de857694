//! Channel event handlers for Discord guild channels.
//!
//! Every channel type is reported. Category names are resolved from the guild cache
//! so the audit embed can show a name instead of an id.

use serenity::all::{Context, GuildChannel, Message};

use crate::bot::handler::log_event;
use crate::model::audit::{AuditEvent, ChannelSnapshot};
use crate::state::BotState;

/// Handles the channel_create event when a channel is created in a guild.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context used to resolve the category and post the notification
/// - `channel` - The newly created guild channel
pub async fn handle_channel_create(state: &BotState, ctx: Context, channel: GuildChannel) {
    let event = AuditEvent::ChannelCreated {
        guild_id: channel.guild_id.get(),
        channel: snapshot(&ctx, &channel),
    };

    log_event(state, &ctx, event).await;
}

/// Handles the channel_update event when a channel is updated in a guild.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context used to resolve categories and post the notification
/// - `old` - Cached channel state before the update, if any
/// - `new` - Channel state after the update
pub async fn handle_channel_update(
    state: &BotState,
    ctx: Context,
    old: Option<GuildChannel>,
    new: GuildChannel,
) {
    let event = AuditEvent::ChannelUpdated {
        guild_id: new.guild_id.get(),
        before: old.as_ref().map(|old| snapshot(&ctx, old)),
        after: snapshot(&ctx, &new),
    };

    log_event(state, &ctx, event).await;
}

/// Handles the channel_delete event when a channel is deleted from a guild.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context used to resolve the category and post the notification
/// - `channel` - The deleted guild channel
/// - `_messages` - Cached messages from the channel (unused)
pub async fn handle_channel_delete(
    state: &BotState,
    ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let event = AuditEvent::ChannelDeleted {
        guild_id: channel.guild_id.get(),
        channel: snapshot(&ctx, &channel),
    };

    log_event(state, &ctx, event).await;
}

fn snapshot(ctx: &Context, channel: &GuildChannel) -> ChannelSnapshot {
    let mut snapshot = ChannelSnapshot::from(channel);

    snapshot.category_name = channel.parent_id.and_then(|parent_id| {
        ctx.cache.guild(channel.guild_id).and_then(|guild| {
            guild
                .channels
                .get(&parent_id)
                .map(|category| category.name.clone())
        })
    });

    snapshot
}
