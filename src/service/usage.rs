//! Command usage logger.

use sea_orm::DatabaseConnection;

use crate::data::GuildConfigRepository;
use crate::error::notify::NotifyError;
use crate::model::usage::CommandUsage;
use crate::service::notifier::Notifier;

/// Text channel used when a guild has no working log channel configured.
pub const FALLBACK_LOG_CHANNEL: &str = "collector_logs";

pub struct CommandUsageService<'a, N: Notifier> {
    db: &'a DatabaseConnection,
    notifier: &'a N,
}

impl<'a, N: Notifier> CommandUsageService<'a, N> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a N) -> Self {
        Self { db, notifier }
    }

    /// Posts a record of a command invocation.
    ///
    /// Delivers to the guild's configured log channel, falling back to a text channel
    /// named `collector_logs` when none is configured or the configured one is gone.
    /// Invocations outside a guild and guilds with neither channel are only logged
    /// locally. Never fails and never retries.
    ///
    /// # Returns
    /// - `Some(channel_id)` - Channel the record was posted to
    /// - `None` - Nothing was posted
    pub async fn record(&self, usage: &CommandUsage) -> Option<u64> {
        let Some(guild_id) = usage.guild_id else {
            tracing::info!(
                "Command '{}' used outside a guild by {}",
                usage.command_name,
                usage.invoker.id
            );
            return None;
        };

        let notification = usage.to_notification();

        let configured = match GuildConfigRepository::new(self.db)
            .get_log_channel(guild_id)
            .await
        {
            Ok(channel_id) => channel_id,
            Err(e) => {
                tracing::error!("Failed to read log channel for guild {}: {}", guild_id, e);
                None
            }
        };

        if let Some(channel_id) = configured {
            match self.notifier.send(channel_id, &notification).await {
                Ok(()) => return Some(channel_id),
                Err(NotifyError::ChannelUnavailable(_)) => {
                    tracing::warn!(
                        "Log channel {} for guild {} is unavailable, trying '{}'",
                        channel_id,
                        guild_id,
                        FALLBACK_LOG_CHANNEL
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to log usage of '{}' in guild {}: {}",
                        usage.command_name,
                        guild_id,
                        e
                    );
                    return None;
                }
            }
        }

        let fallback = match self
            .notifier
            .find_text_channel(guild_id, FALLBACK_LOG_CHANNEL)
            .await
        {
            Ok(channel_id) => channel_id,
            Err(e) => {
                tracing::error!("Failed to list channels of guild {}: {}", guild_id, e);
                return None;
            }
        };

        let Some(channel_id) = fallback else {
            tracing::info!(
                "No log channel found for command '{}' in guild {}",
                usage.command_name,
                guild_id
            );
            return None;
        };

        match self.notifier.send(channel_id, &notification).await {
            Ok(()) => Some(channel_id),
            Err(e) => {
                tracing::error!(
                    "Failed to log usage of '{}' in guild {}: {}",
                    usage.command_name,
                    guild_id,
                    e
                );
                None
            }
        }
    }
}
