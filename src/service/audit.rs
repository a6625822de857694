//! Event audit logger.
//!
//! For each guild event the logger checks the guild's flag for that event kind,
//! builds a notification describing what changed, resolves the guild's log channel
//! and posts the notification there. Every failure is logged and swallowed so a
//! broken log channel never affects anything else the bot does.

use sea_orm::DatabaseConnection;

use crate::data::{GuildConfigRepository, LoggingConfigRepository};
use crate::error::{notify::NotifyError, AppError};
use crate::model::audit::{
    truncate, AuditEvent, Notification, VoiceTransition, COLOUR_BLUE, COLOUR_GREEN, COLOUR_RED,
    FIELD_VALUE_LIMIT,
};
use crate::service::notifier::Notifier;

/// Placeholder shown when a deleted message's text is unknown or empty.
pub const CONTENT_UNAVAILABLE: &str = "*Content not available*";

/// What the audit logger did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// The guild has not enabled logging for this event kind.
    Disabled,
    /// Nothing worth reporting, e.g. an edit that left the text unchanged.
    Suppressed,
    /// The guild has no log channel configured.
    NoChannel,
    /// The configured channel was deleted or the bot lost access to it.
    ChannelUnavailable,
    /// A database or platform error occurred; details were logged.
    Failed,
    Sent,
}

pub struct AuditLogService<'a, N: Notifier> {
    db: &'a DatabaseConnection,
    notifier: &'a N,
}

impl<'a, N: Notifier> AuditLogService<'a, N> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a N) -> Self {
        Self { db, notifier }
    }

    /// Reports a guild event to the guild's log channel if enabled.
    ///
    /// Never returns an error; failures are logged and reported as
    /// [`AuditOutcome::Failed`].
    ///
    /// # Arguments
    /// - `event` - The guild event to report
    ///
    /// # Returns
    /// - `AuditOutcome` - What happened to the event
    pub async fn handle(&self, event: &AuditEvent) -> AuditOutcome {
        match self.try_handle(event).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(
                    "Failed to log {} event for guild {}: {}",
                    event.kind(),
                    event.guild_id(),
                    e
                );
                AuditOutcome::Failed
            }
        }
    }

    async fn try_handle(&self, event: &AuditEvent) -> Result<AuditOutcome, AppError> {
        let guild_id = event.guild_id();
        let kind = event.kind();

        let logging_repo = LoggingConfigRepository::new(self.db);
        if !logging_repo.get_flag(guild_id, kind).await? {
            return Ok(AuditOutcome::Disabled);
        }

        let Some(notification) = build_notification(event) else {
            tracing::debug!("Suppressed {} event for guild {}", kind, guild_id);
            return Ok(AuditOutcome::Suppressed);
        };

        let config_repo = GuildConfigRepository::new(self.db);
        let Some(channel_id) = config_repo.get_log_channel(guild_id).await? else {
            tracing::warn!(
                "Logging for {} is enabled in guild {} but no log channel is configured",
                kind,
                guild_id
            );
            return Ok(AuditOutcome::NoChannel);
        };

        match self.notifier.send(channel_id, &notification).await {
            Ok(()) => {
                tracing::info!("Logged {} event for guild {}", kind, guild_id);
                Ok(AuditOutcome::Sent)
            }
            Err(NotifyError::ChannelUnavailable(channel_id)) => {
                tracing::warn!(
                    "Log channel {} for guild {} is unavailable",
                    channel_id,
                    guild_id
                );
                Ok(AuditOutcome::ChannelUnavailable)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Describes an event as a notification.
///
/// # Returns
/// - `Some(Notification)` - The embed to post
/// - `None` - The event carries nothing to report: an edit whose previous text was
///   not cached, or whose text did not change
pub fn build_notification(event: &AuditEvent) -> Option<Notification> {
    let notification = match event {
        AuditEvent::MemberJoined { guild_id, member } => {
            Notification::new("Action: `Member Joined`", COLOUR_GREEN)
                .field("User", member.mention(), true)
                .field("Guild ID", guild_id.to_string(), true)
                .footer(format!("User ID: {}", member.id))
                .author(member)
        }
        AuditEvent::MemberLeft { guild_id, member } => {
            Notification::new("Action: `Member Left`", COLOUR_RED)
                .field("User", member.mention(), true)
                .field("Guild ID", guild_id.to_string(), true)
                .footer(format!("User ID: {}", member.id))
                .author(member)
        }
        AuditEvent::MessageEdited {
            channel_id,
            author,
            before,
            after,
            ..
        } => {
            let (Some(before), Some(after)) = (before, after) else {
                return None;
            };
            if before == after {
                return None;
            }

            Notification::new("Action: `Message Edited`", COLOUR_BLUE)
                .field("User", author.mention(), true)
                .field("Channel", format!("<#{}>", channel_id), true)
                .field("Before", italic(before), false)
                .field("After", italic(after), false)
                .footer(format!("User ID: {}", author.id))
        }
        AuditEvent::MessageDeleted {
            channel_id,
            author,
            content,
            ..
        } => {
            let content = match content.as_deref() {
                Some(text) if !text.is_empty() => italic(text),
                _ => CONTENT_UNAVAILABLE.to_string(),
            };
            let user = author
                .as_ref()
                .map(|author| author.mention())
                .unwrap_or_else(|| "Unknown".to_string());
            let user_id = author
                .as_ref()
                .map(|author| author.id.to_string())
                .unwrap_or_else(|| "Unknown".to_string());

            Notification::new("Action: `Message Deleted`", COLOUR_RED)
                .field("User", user, true)
                .field("Channel", format!("<#{}>", channel_id), true)
                .field("Content", content, false)
                .footer(format!("User ID: {}", user_id))
        }
        AuditEvent::VoiceStateUpdated {
            member,
            before_channel,
            after_channel,
            ..
        } => {
            let transition = VoiceTransition::classify(*before_channel, *after_channel);
            let colour = if after_channel.is_some() {
                COLOUR_GREEN
            } else {
                COLOUR_RED
            };

            let mut notification =
                Notification::new(format!("Action: `{}`", transition.label()), colour)
                    .field("User", member.mention(), false);
            if let Some(from) = before_channel {
                notification = notification.field("From", format!("<#{}>", from), true);
            }
            if let Some(to) = after_channel {
                notification = notification.field("To", format!("<#{}>", to), true);
            }

            notification.footer(format!("User ID: {}", member.id))
        }
        AuditEvent::ChannelCreated { channel, .. } => {
            Notification::new("Action: `Channel Created`", COLOUR_GREEN)
                .field("Channel", channel.mention(), true)
                .field("Channel Type", channel.kind.clone(), true)
                .footer(format!("Channel ID: {}", channel.id))
        }
        AuditEvent::ChannelDeleted { channel, .. } => {
            Notification::new("Action: `Channel Deleted`", COLOUR_RED)
                .field("Channel Name", channel.name.clone(), true)
                .field("Channel Type", channel.kind.clone(), true)
                .footer(format!("Channel ID: {}", channel.id))
        }
        AuditEvent::ChannelUpdated { before, after, .. } => {
            let mut notification = Notification::new("Action: `Channel Updated`", COLOUR_BLUE)
                .field("Channel", after.mention(), true);

            let changes = before
                .as_ref()
                .map(|before| after.changes_since(before))
                .unwrap_or_default();
            if !changes.is_empty() {
                notification = notification.field("Changes", changes.join("\n"), false);
            }

            notification.footer(format!("Channel ID: {}", after.id))
        }
    };

    Some(notification)
}

/// Wraps message text in italics, shortened to fit an embed field.
fn italic(text: &str) -> String {
    format!("*{}*", truncate(text, FIELD_VALUE_LIMIT - 2))
}
