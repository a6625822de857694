//! Delivery of notifications to guild channels.
//!
//! Services never talk to the Discord HTTP client directly; they receive a
//! [`Notifier`] at construction so delivery can be swapped for a recording
//! implementation in tests.

use serenity::all::{
    ButtonStyle, ChannelId, ChannelType, CreateActionRow, CreateButton, CreateEmbed,
    CreateEmbedAuthor, CreateEmbedFooter, CreateMessage, GuildId,
};
use serenity::http::{Http, HttpError};
use std::sync::Arc;

use crate::error::notify::NotifyError;
use crate::model::audit::Notification;
use crate::util::time::to_discord_timestamp;

/// Sends notifications and resolves channels on the chat platform.
#[serenity::async_trait]
pub trait Notifier: Send + Sync {
    /// Posts a notification embed to a channel.
    ///
    /// # Returns
    /// - `Ok(())` - Message was delivered
    /// - `Err(NotifyError::ChannelUnavailable)` - Channel was deleted or the bot lacks access
    /// - `Err(NotifyError::Discord)` - Any other platform failure
    async fn send(&self, channel_id: u64, notification: &Notification) -> Result<(), NotifyError>;

    /// Finds a text channel in a guild by exact name.
    async fn find_text_channel(&self, guild_id: u64, name: &str)
        -> Result<Option<u64>, NotifyError>;
}

/// [`Notifier`] backed by the bot's shared HTTP client.
#[derive(Clone)]
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[serenity::async_trait]
impl Notifier for DiscordNotifier {
    async fn send(&self, channel_id: u64, notification: &Notification) -> Result<(), NotifyError> {
        let mut message = CreateMessage::new().embed(build_embed(notification));
        if let Some(button) = &notification.button {
            message = message.components(vec![CreateActionRow::Buttons(vec![
                CreateButton::new(&button.custom_id)
                    .style(ButtonStyle::Danger)
                    .label(&button.label),
            ])]);
        }

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await
            .map_err(|e| map_delivery_error(channel_id, e))?;

        Ok(())
    }

    async fn find_text_channel(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<u64>, NotifyError> {
        let channels = GuildId::new(guild_id).channels(&self.http).await?;

        Ok(channels
            .values()
            .find(|channel| channel.kind == ChannelType::Text && channel.name == name)
            .map(|channel| channel.id.get()))
    }
}

/// Converts a notification into a Discord embed.
///
/// A timestamp outside Discord's range is logged and left off the embed.
pub fn build_embed(notification: &Notification) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .description(&notification.description)
        .color(notification.colour);

    if let Some(title) = &notification.title {
        embed = embed.title(title);
    }

    for field in &notification.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    if let Some(footer) = &notification.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    if let Some(author) = &notification.author {
        let mut embed_author = CreateEmbedAuthor::new(&author.name);
        if let Some(icon_url) = &author.icon_url {
            embed_author = embed_author.icon_url(icon_url);
        }
        embed = embed.author(embed_author);
    }

    match to_discord_timestamp(notification.timestamp) {
        Ok(timestamp) => embed.timestamp(timestamp),
        Err(e) => {
            tracing::warn!("Omitting embed timestamp: {}", e);
            embed
        }
    }
}

/// Maps 403 and 404 responses to [`NotifyError::ChannelUnavailable`].
fn map_delivery_error(channel_id: u64, err: serenity::Error) -> NotifyError {
    if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
        if matches!(response.status_code.as_u16(), 403 | 404) {
            return NotifyError::ChannelUnavailable(channel_id);
        }
    }

    NotifyError::from(err)
}
