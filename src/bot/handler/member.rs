//! Member join and leave events.

use serenity::all::{Context, GuildId, Member, User};

use crate::bot::handler::log_event;
use crate::model::audit::{Actor, AuditEvent};
use crate::state::BotState;

/// Handles the guild_member_addition event when a user joins a guild.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context used to post the audit notification
/// - `new_member` - The member who joined
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    let event = AuditEvent::MemberJoined {
        guild_id: new_member.guild_id.get(),
        member: Actor::from(&new_member.user),
    };

    log_event(state, &ctx, event).await;
}

/// Handles the guild_member_removal event when a user leaves or is removed from a guild.
///
/// The user payload is always sent by Discord, so cached member data is not needed.
pub async fn handle_guild_member_removal(
    state: &BotState,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let event = AuditEvent::MemberLeft {
        guild_id: guild_id.get(),
        member: Actor::from(&user),
    };

    log_event(state, &ctx, event).await;
}
