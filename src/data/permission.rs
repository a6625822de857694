use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::permission::AuthorizedUser;

pub struct PermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<AuthorizedUser>, DbErr> {
        entity::prelude::Permission::find_by_id((guild_id.to_string(), user_id.to_string()))
            .one(self.db)
            .await?
            .map(AuthorizedUser::from_entity)
            .transpose()
    }

    /// Whether the user holds an enabled grant in the guild.
    pub async fn is_authorised(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        Ok(self
            .find(guild_id, user_id)
            .await?
            .map(|grant| grant.can_use_commands)
            .unwrap_or(false))
    }

    /// Grants or revokes admin command access for a user in one upsert.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `can_use_commands` - `true` to authorise, `false` to revoke
    ///
    /// # Returns
    /// - `Ok(AuthorizedUser)` - The stored grant
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set(
        &self,
        guild_id: u64,
        user_id: u64,
        can_use_commands: bool,
    ) -> Result<AuthorizedUser, DbErr> {
        let entity = entity::prelude::Permission::insert(entity::permission::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            can_use_commands: ActiveValue::Set(can_use_commands),
        })
        .on_conflict(
            OnConflict::columns([
                entity::permission::Column::GuildId,
                entity::permission::Column::UserId,
            ])
            .update_column(entity::permission::Column::CanUseCommands)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        AuthorizedUser::from_entity(entity)
    }
}
