use crate::util::parse::parse_stored_id;

/// A per-guild grant allowing a non-administrator to run admin commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedUser {
    pub guild_id: u64,
    pub user_id: u64,
    pub can_use_commands: bool,
}

impl AuthorizedUser {
    pub fn from_entity(entity: entity::permission::Model) -> Result<Self, sea_orm::DbErr> {
        Ok(Self {
            guild_id: parse_stored_id(&entity.guild_id)?,
            user_id: parse_stored_id(&entity.user_id)?,
            can_use_commands: entity.can_use_commands,
        })
    }
}

/// Who may invoke a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAccess {
    Everyone,
    /// Owner, guild administrator, or an authorised user.
    Admin,
    /// Platform-native administrator permission only.
    Administrator,
    /// The configured owner only.
    Owner,
}

/// The user invoking a command, as seen by the permission gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invoker {
    pub user_id: u64,
    pub guild_id: Option<u64>,
    /// Whether the user holds the administrator permission in `guild_id`.
    pub is_administrator: bool,
}
