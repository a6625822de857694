//! Logging configuration commands.

use sea_orm::DatabaseConnection;

use crate::data::{GuildConfigRepository, LoggingConfigRepository};
use crate::error::AppError;
use crate::model::guild_config::GuildConfig;
use crate::model::logging::{LogEventSelection, LoggingConfig};

pub struct LoggingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoggingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes sure the guild has a logging config row before showing the event menu.
    pub async fn prepare(&self, guild_id: u64) -> Result<LoggingConfig, AppError> {
        Ok(LoggingConfigRepository::new(self.db).ensure(guild_id).await?)
    }

    /// Applies an event menu submission.
    ///
    /// # Arguments
    /// - `guild_id` - Guild being configured
    /// - `values` - Raw select menu values; `all` selects every event
    /// - `enabled` - Whether the menu was opened by the enable or the disable command
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation to show the user
    /// - `Err(AppError::BadRequest)` - Empty or unknown selection
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn apply_selection<S: AsRef<str>>(
        &self,
        guild_id: u64,
        values: &[S],
        enabled: bool,
    ) -> Result<String, AppError> {
        let selection = LogEventSelection::from_values(values)?;

        LoggingConfigRepository::new(self.db)
            .set_flags(guild_id, &selection.events(), enabled)
            .await?;

        tracing::info!("Updated logging configuration for guild {}", guild_id);

        let action = if enabled { "Enabled" } else { "Disabled" };
        let targets = match &selection {
            LogEventSelection::All => "all".to_string(),
            LogEventSelection::Events(events) => events
                .iter()
                .map(|event| event.id())
                .collect::<Vec<_>>()
                .join(", "),
        };

        Ok(format!("{} logging for {} events.", action, targets))
    }

    /// Current flags, or `None` when the guild never configured logging.
    pub async fn settings(&self, guild_id: u64) -> Result<Option<LoggingConfig>, AppError> {
        Ok(LoggingConfigRepository::new(self.db).get(guild_id).await?)
    }

    pub async fn set_log_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<GuildConfig, AppError> {
        let config = GuildConfigRepository::new(self.db)
            .set_log_channel(guild_id, channel_id)
            .await?;

        tracing::info!("Set log channel for guild {} to {}", guild_id, channel_id);

        Ok(config)
    }
}
