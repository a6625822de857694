//! Customisation factory for creating generic guild settings.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test settings rows.
///
/// Defaults to an `embed_color` setting of `c4a7ec` in a fresh guild.
pub struct CustomisationFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    setting_type: String,
    value: String,
}

impl<'a> CustomisationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            setting_type: "embed_color".to_string(),
            value: "c4a7ec".to_string(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn setting_type(mut self, setting_type: impl Into<String>) -> Self {
        self.setting_type = setting_type.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Builds and inserts the setting into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customisation::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert, including a duplicate `(guild_id, type)`
    pub async fn build(self) -> Result<entity::customisation::Model, DbErr> {
        entity::customisation::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            setting_type: ActiveValue::Set(self.setting_type),
            value: ActiveValue::Set(self.value),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a setting row for the given guild, type and value.
pub async fn create_setting(
    db: &DatabaseConnection,
    guild_id: &str,
    setting_type: &str,
    value: &str,
) -> Result<entity::customisation::Model, DbErr> {
    CustomisationFactory::new(db)
        .guild_id(guild_id)
        .setting_type(setting_type)
        .value(value)
        .build()
        .await
}
