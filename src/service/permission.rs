//! Permission gate for commands.

use sea_orm::DatabaseConnection;

use crate::data::PermissionRepository;
use crate::error::{auth::AuthError, AppError};
use crate::model::permission::{CommandAccess, Invoker};

pub struct PermissionService<'a> {
    db: &'a DatabaseConnection,
    owner_id: u64,
}

impl<'a> PermissionService<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: u64) -> Self {
        Self { db, owner_id }
    }

    /// Exact match against the configured bot owner.
    pub fn is_owner(&self, user_id: u64) -> bool {
        user_id == self.owner_id
    }

    /// Whether the invoker may run admin commands in their guild.
    ///
    /// True for the owner, for holders of the administrator permission and for users
    /// with an enabled grant in the guild. Always false outside a guild unless the
    /// invoker is the owner.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether access is allowed
    /// - `Err(AppError::DbErr)` - Database error while reading grants
    pub async fn can_use_admin_commands(&self, invoker: &Invoker) -> Result<bool, AppError> {
        if self.is_owner(invoker.user_id) {
            return Ok(true);
        }

        let Some(guild_id) = invoker.guild_id else {
            return Ok(false);
        };

        if invoker.is_administrator {
            return Ok(true);
        }

        Ok(PermissionRepository::new(self.db)
            .is_authorised(guild_id, invoker.user_id)
            .await?)
    }

    /// Rejects an invoker who does not meet a command's access level.
    ///
    /// Owner-only commands are never satisfied by administrator status.
    ///
    /// # Arguments
    /// - `access` - The command's access level
    /// - `invoker` - Who is running the command
    ///
    /// # Returns
    /// - `Ok(())` - Access granted
    /// - `Err(AppError::AuthErr)` - Access denied, with the denial to show the user
    /// - `Err(AppError::DbErr)` - Database error while reading grants
    pub async fn check_access(
        &self,
        access: CommandAccess,
        invoker: &Invoker,
    ) -> Result<(), AppError> {
        match access {
            CommandAccess::Everyone => Ok(()),
            CommandAccess::Owner => {
                if self.is_owner(invoker.user_id) {
                    Ok(())
                } else {
                    Err(AuthError::NotOwner.into())
                }
            }
            CommandAccess::Administrator => {
                if invoker.guild_id.is_none() {
                    return Err(AuthError::GuildOnly.into());
                }
                if invoker.is_administrator {
                    Ok(())
                } else {
                    Err(AuthError::NotAdministrator.into())
                }
            }
            CommandAccess::Admin => {
                if invoker.guild_id.is_none() {
                    return Err(AuthError::GuildOnly.into());
                }
                if self.can_use_admin_commands(invoker).await? {
                    Ok(())
                } else {
                    Err(AuthError::NotAuthorised.into())
                }
            }
        }
    }

    /// Grants or revokes admin command access for a user.
    pub async fn set_authorised(
        &self,
        guild_id: u64,
        user_id: u64,
        authorised: bool,
    ) -> Result<(), AppError> {
        PermissionRepository::new(self.db)
            .set(guild_id, user_id, authorised)
            .await?;

        tracing::info!(
            "Set admin command access for user {} in guild {} to {}",
            user_id,
            guild_id,
            authorised
        );

        Ok(())
    }
}
