use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::guild_config::GuildConfig;

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, guild_id: u64) -> Result<Option<GuildConfig>, DbErr> {
        entity::prelude::GuildConfig::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(GuildConfig::from_entity)
            .transpose()
    }

    /// Configured log destination for a guild, if any.
    pub async fn get_log_channel(&self, guild_id: u64) -> Result<Option<u64>, DbErr> {
        Ok(self
            .get(guild_id)
            .await?
            .and_then(|config| config.log_channel_id))
    }

    /// Points the guild's audit and usage logs at a channel.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The stored config
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set_log_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<GuildConfig, DbErr> {
        let entity = entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            log_channel_id: ActiveValue::Set(Some(channel_id.to_string())),
        })
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .update_column(entity::guild_config::Column::LogChannelId)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        GuildConfig::from_entity(entity)
    }
}
