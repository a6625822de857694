use thiserror::Error;

/// Denials raised by the permission gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Command is restricted to the configured bot owner.
    ///
    /// Guild administrator status never satisfies this check.
    #[error("User is not the bot owner")]
    NotOwner,

    /// Command requires the owner, a guild administrator or an authorised user.
    #[error("User is not authorised to use admin commands in this guild")]
    NotAuthorised,

    /// Command requires the platform-native administrator permission.
    #[error("User lacks the administrator permission")]
    NotAdministrator,

    /// Command was invoked outside of a guild.
    #[error("Command can only be used in a guild")]
    GuildOnly,

    /// User is blacklisted from the feature they tried to use.
    #[error("User is blacklisted")]
    Blacklisted,
}

impl AuthError {
    /// Message shown to the invoking user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotOwner => "`Error: This command can only be used by the bot owner.`",
            Self::NotAuthorised => {
                "You do not have permission to use this command. An Admin needs to `/authorise` you!"
            }
            Self::NotAdministrator => {
                "`Error: You need the Administrator permission to use this command.`"
            }
            Self::GuildOnly => "`Error: This command can only be used in a server.`",
            Self::Blacklisted => {
                "You are blacklisted from making suggestions. If you believe this is a mistake, please contact support."
            }
        }
    }
}
