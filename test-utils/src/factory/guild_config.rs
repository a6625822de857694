//! Guild config factory for creating log destination rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test `config` rows.
///
/// Defaults to a fresh guild with a generated log channel id.
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    log_channel_id: Option<String>,
}

impl<'a> GuildConfigFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            log_channel_id: Some(next_id().to_string()),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn log_channel_id(mut self, log_channel_id: Option<String>) -> Self {
        self.log_channel_id = log_channel_id;
        self
    }

    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            log_channel_id: ActiveValue::Set(self.log_channel_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a config row pointing the guild at the given log channel.
pub async fn create_guild_config(
    db: &DatabaseConnection,
    guild_id: &str,
    log_channel_id: u64,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db)
        .guild_id(guild_id)
        .log_channel_id(Some(log_channel_id.to_string()))
        .build()
        .await
}
