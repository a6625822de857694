//! Embed colour, bot presence and avatar commands.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateAttachment, CreateCommand,
    CreateCommandOption, EditProfile, OnlineStatus,
};

use crate::bot::command::{options, reply::Reply, require_guild};
use crate::error::AppError;
use crate::model::setting::ActivityKind;
use crate::service::customisation::{download_avatar, CustomisationService};
use crate::state::BotState;

pub fn register_set_embed_colour() -> CreateCommand {
    CreateCommand::new("set_embed_colour")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "colour",
                "Hexadecimal colour such as #C4A7EC",
            )
            .required(true),
        )
}

pub fn register_set_bio() -> CreateCommand {
    let activity_type = ActivityKind::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "activity_type", "Activity type")
            .required(true),
        |option, kind| option.add_string_choice(kind.as_str(), kind.as_str()),
    );

    CreateCommand::new("set_bio")
        .add_option(activity_type)
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "bio", "Activity text")
                .required(true),
        )
}

pub fn register_change_avatar() -> CreateCommand {
    CreateCommand::new("change_avatar")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "url", "Image URL")
                .required(true),
        )
}

pub async fn set_embed_colour(
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let guild_id = require_guild(interaction.guild_id)?;
    let input = options::string(interaction, "colour")?;

    let colour = CustomisationService::new(&state.db)
        .set_embed_colour(guild_id, &input)
        .await?;

    Ok(Reply::text(format!(
        "`Success: Embed color has been set to #{}!`",
        colour.hex()
    )))
}

/// Persists the activity and applies it to the current gateway session.
pub async fn set_bio(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let activity_type = options::string(interaction, "activity_type")?;
    let bio = options::string(interaction, "bio")?;

    let kind = CustomisationService::new(&state.db)
        .set_presence(&activity_type, &bio)
        .await?;

    ctx.set_presence(Some(kind.activity(&bio)), OnlineStatus::Online);

    Ok(Reply::text(format!(
        "`Success: Bot's activity has been set to {} '{}'`",
        kind, bio
    )))
}

pub async fn change_avatar(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let url = options::string(interaction, "url")?;

    let image = download_avatar(&state.http_client, &url).await?;
    let avatar = CreateAttachment::bytes(image, "avatar.png");

    let mut current_user = ctx.http.get_current_user().await?;
    current_user
        .edit(ctx, EditProfile::new().avatar(&avatar))
        .await?;

    tracing::info!("Avatar changed by user {}", interaction.user.id);

    Ok(Reply::text("`Success: Avatar Changed!`"))
}
