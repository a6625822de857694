use serenity::all::{CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption};

use crate::bot::command::{options, reply::Reply, require_guild};
use crate::error::AppError;
use crate::service::permission::PermissionService;
use crate::state::BotState;

pub fn register_authorise() -> CreateCommand {
    CreateCommand::new("authorise")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "User to authorise")
                .required(true),
        )
}

pub fn register_unauthorise() -> CreateCommand {
    CreateCommand::new("unauthorise")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "User to unauthorise")
                .required(true),
        )
}

/// Grants or revokes admin command access for the user option.
pub async fn set_authorised(
    state: &BotState,
    interaction: &CommandInteraction,
    authorised: bool,
) -> Result<Reply, AppError> {
    let guild_id = require_guild(interaction.guild_id)?;
    let user = options::user(interaction, "user")?;

    PermissionService::new(&state.db, state.config.owner_id)
        .set_authorised(guild_id, user.id.get(), authorised)
        .await?;

    let outcome = if authorised {
        "authorized"
    } else {
        "unauthorized"
    };

    Ok(Reply::text(format!(
        "{} has been {}.",
        user.display_name(),
        outcome
    )))
}
