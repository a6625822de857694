//! `/logging_*` commands and the event selection menu.

use serenity::all::{
    CommandInteraction, CommandOptionType, ComponentInteraction, ComponentInteractionDataKind,
    CreateActionRow, CreateCommand, CreateCommandOption, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};

use crate::bot::command::{options, reply::Reply, require_guild};
use crate::error::AppError;
use crate::model::audit::Notification;
use crate::model::logging::{LogEvent, LoggingConfig, ALL_EVENTS_VALUE};
use crate::service::customisation::CustomisationService;
use crate::service::logging::LoggingService;
use crate::state::BotState;

pub const ENABLE_MENU_ID: &str = "logging:enable";
pub const DISABLE_MENU_ID: &str = "logging:disable";

pub fn register_channel() -> CreateCommand {
    CreateCommand::new("logging_channel")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Channel, "channel", "Log channel")
                .required(true),
        )
}

/// Returns whether a component custom id is the enable or disable menu.
pub fn selection_action(custom_id: &str) -> Option<bool> {
    match custom_id {
        ENABLE_MENU_ID => Some(true),
        DISABLE_MENU_ID => Some(false),
        _ => None,
    }
}

/// Builds the multi-select menu listing every event plus an "all" option.
pub fn selection_menu(enabled: bool) -> CreateSelectMenu {
    let custom_id = if enabled { ENABLE_MENU_ID } else { DISABLE_MENU_ID };

    let mut menu_options = vec![CreateSelectMenuOption::new("ALL", ALL_EVENTS_VALUE)];
    menu_options.extend(
        LogEvent::ALL
            .into_iter()
            .map(|event| CreateSelectMenuOption::new(event.label(), event.id())),
    );
    let max_values = menu_options.len() as u8;

    CreateSelectMenu::new(
        custom_id,
        CreateSelectMenuKind::String {
            options: menu_options,
        },
    )
    .min_values(1)
    .max_values(max_values)
}

/// Ensures the guild has a logging row and replies with the event selection menu.
pub async fn enable_or_disable(
    state: &BotState,
    interaction: &CommandInteraction,
    enabled: bool,
) -> Result<Reply, AppError> {
    let guild_id = require_guild(interaction.guild_id)?;

    LoggingService::new(&state.db).prepare(guild_id).await?;

    let action = if enabled { "enable" } else { "disable" };
    Ok(
        Reply::text(format!("Select events to {} logging:", action)).components(vec![
            CreateActionRow::SelectMenu(selection_menu(enabled)),
        ]),
    )
}

pub async fn settings(
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let guild_id = require_guild(interaction.guild_id)?;

    let Some(config) = LoggingService::new(&state.db).settings(guild_id).await? else {
        return Ok(Reply::text("No logging settings configured for this guild."));
    };

    let colour = CustomisationService::new(&state.db)
        .embed_colour(guild_id)
        .await;

    Ok(Reply::embed(&settings_notification(&config, colour)))
}

pub fn settings_notification(config: &LoggingConfig, colour: u32) -> Notification {
    LogEvent::ALL.into_iter().fold(
        Notification::new("Current logging configuration", colour).title("Logging Settings"),
        |notification, event| {
            let state = if config.is_enabled(event) {
                "enabled"
            } else {
                "disabled"
            };
            notification.field(event.label(), format!("```\n{}\n```", state), true)
        },
    )
}

pub async fn set_channel(
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let guild_id = require_guild(interaction.guild_id)?;
    let channel_id = options::channel_id(interaction, "channel")?;

    LoggingService::new(&state.db)
        .set_log_channel(guild_id, channel_id)
        .await?;

    Ok(Reply::text(format!("Log messages will be sent to <#{}>.", channel_id)))
}

/// Applies the events picked in the selection menu and replaces the menu with the result.
pub async fn apply_selection(
    state: &BotState,
    component: &ComponentInteraction,
    enabled: bool,
) -> Result<Reply, AppError> {
    let guild_id = require_guild(component.guild_id)?;

    let ComponentInteractionDataKind::StringSelect { values } = &component.data.kind else {
        return Err(AppError::BadRequest(
            "`Error: Select at least one event.`".to_string(),
        ));
    };

    let message = LoggingService::new(&state.db)
        .apply_selection(guild_id, values.as_slice(), enabled)
        .await?;

    Ok(Reply::text(message).components(Vec::new()))
}
