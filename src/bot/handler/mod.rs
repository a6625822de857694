use serenity::all::{
    ChannelId, Context, EventHandler, GuildChannel, GuildId, Interaction, Member, Message,
    MessageId, MessageUpdateEvent, Ready, User, VoiceState,
};
use serenity::async_trait;

use crate::model::audit::AuditEvent;
use crate::model::module::FeatureModule;
use crate::service::audit::AuditLogService;
use crate::service::notifier::DiscordNotifier;
use crate::state::BotState;

pub mod channel;
pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
}

impl Handler {
    pub fn new(state: BotState) -> Self {
        Self { state }
    }
}

/// Passes a guild event to the audit logger while the logging module is loaded.
pub(crate) async fn log_event(state: &BotState, ctx: &Context, event: AuditEvent) {
    if !state.modules.is_loaded(FeatureModule::Logging).await {
        tracing::debug!(
            "Logging module unloaded, ignoring {} in guild {}",
            event.kind(),
            event.guild_id()
        );
        return;
    }

    let notifier = DiscordNotifier::new(ctx.http.clone());
    let outcome = AuditLogService::new(&state.db, &notifier)
        .handle(&event)
        .await;

    tracing::debug!(
        "Audit event {} in guild {}: {:?}",
        event.kind(),
        event.guild_id(),
        outcome
    );
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called for slash commands and message components
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.state, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            &self.state,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }

    /// Called when a message is edited
    async fn message_update(
        &self,
        ctx: Context,
        old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        message::handle_message_update(&self.state, ctx, old_if_available, new, event).await;
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(&self.state, ctx, channel_id, deleted_message_id, guild_id)
            .await;
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.state, ctx, old, new).await;
    }

    /// Called when a channel is created in a guild
    async fn channel_create(&self, ctx: Context, channel: GuildChannel) {
        channel::handle_channel_create(&self.state, ctx, channel).await;
    }

    /// Called when a channel is updated in a guild
    async fn channel_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        channel::handle_channel_update(&self.state, ctx, old, new).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(&self.state, ctx, channel, messages).await;
    }
}
