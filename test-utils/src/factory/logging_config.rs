//! Logging config factory for creating per-guild audit log switches.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test logging config rows with customizable flags.
///
/// # Example
///
/// ```rust,ignore
/// let config = LoggingConfigFactory::new(&db)
///     .guild_id("123")
///     .message_delete(true)
///     .build()
///     .await?;
/// ```
pub struct LoggingConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    member_join: bool,
    member_remove: bool,
    message_edit: bool,
    message_delete: bool,
    voice_state_update: bool,
    guild_channel_create: bool,
    guild_channel_delete: bool,
    guild_channel_update: bool,
}

impl<'a> LoggingConfigFactory<'a> {
    /// Creates a new LoggingConfigFactory with every flag disabled.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `LoggingConfigFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            member_join: false,
            member_remove: false,
            message_edit: false,
            message_delete: false,
            voice_state_update: false,
            guild_channel_create: false,
            guild_channel_delete: false,
            guild_channel_update: false,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets every flag to the same value.
    pub fn all(mut self, enabled: bool) -> Self {
        self.member_join = enabled;
        self.member_remove = enabled;
        self.message_edit = enabled;
        self.message_delete = enabled;
        self.voice_state_update = enabled;
        self.guild_channel_create = enabled;
        self.guild_channel_delete = enabled;
        self.guild_channel_update = enabled;
        self
    }

    pub fn member_join(mut self, enabled: bool) -> Self {
        self.member_join = enabled;
        self
    }

    pub fn member_remove(mut self, enabled: bool) -> Self {
        self.member_remove = enabled;
        self
    }

    pub fn message_edit(mut self, enabled: bool) -> Self {
        self.message_edit = enabled;
        self
    }

    pub fn message_delete(mut self, enabled: bool) -> Self {
        self.message_delete = enabled;
        self
    }

    pub fn voice_state_update(mut self, enabled: bool) -> Self {
        self.voice_state_update = enabled;
        self
    }

    pub fn guild_channel_create(mut self, enabled: bool) -> Self {
        self.guild_channel_create = enabled;
        self
    }

    pub fn guild_channel_delete(mut self, enabled: bool) -> Self {
        self.guild_channel_delete = enabled;
        self
    }

    pub fn guild_channel_update(mut self, enabled: bool) -> Self {
        self.guild_channel_update = enabled;
        self
    }

    /// Builds and inserts the logging config into the database.
    ///
    /// # Returns
    /// - `Ok(entity::logging_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::logging_config::Model, DbErr> {
        entity::logging_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            member_join: ActiveValue::Set(self.member_join),
            member_remove: ActiveValue::Set(self.member_remove),
            message_edit: ActiveValue::Set(self.message_edit),
            message_delete: ActiveValue::Set(self.message_delete),
            voice_state_update: ActiveValue::Set(self.voice_state_update),
            guild_channel_create: ActiveValue::Set(self.guild_channel_create),
            guild_channel_delete: ActiveValue::Set(self.guild_channel_delete),
            guild_channel_update: ActiveValue::Set(self.guild_channel_update),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a logging config row with every flag disabled.
///
/// Shorthand for `LoggingConfigFactory::new(db).build().await`.
pub async fn create_logging_config(
    db: &DatabaseConnection,
) -> Result<entity::logging_config::Model, DbErr> {
    LoggingConfigFactory::new(db).build().await
}
