//! Permission factory for creating authorised user grants.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test permission rows.
///
/// Defaults to a granted (`can_use_commands = true`) row for fresh guild and user ids.
pub struct PermissionFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    can_use_commands: bool,
}

impl<'a> PermissionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            user_id: next_id().to_string(),
            can_use_commands: true,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn can_use_commands(mut self, can_use_commands: bool) -> Self {
        self.can_use_commands = can_use_commands;
        self
    }

    pub async fn build(self) -> Result<entity::permission::Model, DbErr> {
        entity::permission::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            can_use_commands: ActiveValue::Set(self.can_use_commands),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a permission row for a user in a guild.
pub async fn create_permission(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    can_use_commands: bool,
) -> Result<entity::permission::Model, DbErr> {
    PermissionFactory::new(db)
        .guild_id(guild_id)
        .user_id(user_id)
        .can_use_commands(can_use_commands)
        .build()
        .await
}
