use migration::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::logging::{LogEvent, LoggingConfig};

pub struct LoggingConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoggingConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the logging config row for a guild.
    ///
    /// # Returns
    /// - `Ok(Some(LoggingConfig))` - Guild has configured logging before
    /// - `Ok(None)` - No row exists for the guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, guild_id: u64) -> Result<Option<LoggingConfig>, DbErr> {
        entity::prelude::LoggingConfig::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(LoggingConfig::from_entity)
            .transpose()
    }

    /// Reads one event flag, treating a missing row as disabled.
    pub async fn get_flag(&self, guild_id: u64, event: LogEvent) -> Result<bool, DbErr> {
        Ok(self
            .get(guild_id)
            .await?
            .map(|config| config.is_enabled(event))
            .unwrap_or(false))
    }

    /// Creates an all-disabled row for the guild if none exists.
    ///
    /// Existing flags are left untouched.
    ///
    /// # Returns
    /// - `Ok(LoggingConfig)` - The guild's current config
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn ensure(&self, guild_id: u64) -> Result<LoggingConfig, DbErr> {
        self.set_flags(guild_id, &[], false).await
    }

    /// Sets the given event flags for a guild in one upsert statement.
    ///
    /// A new row starts with every other flag disabled; on conflict only the selected
    /// columns are updated, so selecting every event updates all eight flags atomically.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `events` - Event kinds to change; an empty slice only ensures the row exists
    /// - `enabled` - New value for every selected flag
    ///
    /// # Returns
    /// - `Ok(LoggingConfig)` - The row after the update
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set_flags(
        &self,
        guild_id: u64,
        events: &[LogEvent],
        enabled: bool,
    ) -> Result<LoggingConfig, DbErr> {
        let mut model = entity::logging_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            member_join: ActiveValue::Set(false),
            member_remove: ActiveValue::Set(false),
            message_edit: ActiveValue::Set(false),
            message_delete: ActiveValue::Set(false),
            voice_state_update: ActiveValue::Set(false),
            guild_channel_create: ActiveValue::Set(false),
            guild_channel_delete: ActiveValue::Set(false),
            guild_channel_update: ActiveValue::Set(false),
        };
        for event in events {
            model.set(event.column(), enabled.into());
        }

        let mut on_conflict = OnConflict::column(entity::logging_config::Column::GuildId);
        if events.is_empty() {
            on_conflict.update_column(entity::logging_config::Column::GuildId);
        } else {
            on_conflict.update_columns(events.iter().map(|event| event.column()));
        }

        let entity = entity::prelude::LoggingConfig::insert(model)
            .on_conflict(on_conflict)
            .exec_with_returning(self.db)
            .await?;

        LoggingConfig::from_entity(entity)
    }
}
