use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait};

use crate::model::setting::{Setting, SettingType};

/// Works on the pooled connection or inside a transaction.
pub struct SettingRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads a setting value for a guild.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Stored value
    /// - `Ok(None)` - Setting never written for this guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(
        &self,
        guild_id: u64,
        setting_type: SettingType,
    ) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::Customisation::find_by_id((
            guild_id.to_string(),
            setting_type.as_str().to_string(),
        ))
        .one(self.db)
        .await?;

        Ok(entity.map(|e| e.value))
    }

    /// Inserts or overwrites a setting in one statement.
    ///
    /// Uniqueness on `(guild_id, type)` means a second write replaces the value
    /// rather than adding a row.
    ///
    /// # Returns
    /// - `Ok(Setting)` - The stored setting
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        guild_id: u64,
        setting_type: SettingType,
        value: &str,
    ) -> Result<Setting, DbErr> {
        let entity = entity::prelude::Customisation::insert(entity::customisation::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            setting_type: ActiveValue::Set(setting_type.as_str().to_string()),
            value: ActiveValue::Set(value.to_string()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::customisation::Column::GuildId,
                entity::customisation::Column::SettingType,
            ])
            .update_column(entity::customisation::Column::Value)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Setting::from_entity(entity)
    }
}
