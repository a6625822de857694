//! Slash command surface.
//!
//! Every command and message component passes through one dispatcher:
//! 1. Permission gate for the command's access level
//! 2. Loaded check for the command's feature module
//! 3. Deferral for commands that may outlast the interaction deadline
//! 4. The command handler
//! 5. An ephemeral reply, with errors mapped through `AppError::user_message`
//! 6. The command usage logger, whose outcome never affects the reply

pub mod admin;
pub mod customisation;
pub mod help;
pub mod logging;
pub mod options;
pub mod permission;
pub mod reply;
pub mod utility;

use serenity::all::{
    Command, CommandInteraction, ComponentInteraction, Context, CreateCommand, GuildId, Member,
    User,
};

use crate::bot::command::reply::Reply;
use crate::error::{auth::AuthError, AppError};
use crate::model::audit::Actor;
use crate::model::module::FeatureModule;
use crate::model::permission::{CommandAccess, Invoker};
use crate::model::usage::CommandUsage;
use crate::service::notifier::DiscordNotifier;
use crate::service::permission::PermissionService;
use crate::service::suggestion::parse_blacklist_button;
use crate::service::usage::CommandUsageService;
use crate::state::BotState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    LoggingEnable,
    LoggingDisable,
    LoggingSettings,
    LoggingChannel,
    Authorise,
    Unauthorise,
    SetEmbedColour,
    SetBio,
    ChangeAvatar,
    ResetTable,
    DeleteTable,
    Load,
    Unload,
    Reload,
    Stats,
    Suggest,
    Help,
}

impl BotCommand {
    pub const ALL: [BotCommand; 17] = [
        Self::LoggingEnable,
        Self::LoggingDisable,
        Self::LoggingSettings,
        Self::LoggingChannel,
        Self::Authorise,
        Self::Unauthorise,
        Self::SetEmbedColour,
        Self::SetBio,
        Self::ChangeAvatar,
        Self::ResetTable,
        Self::DeleteTable,
        Self::Load,
        Self::Unload,
        Self::Reload,
        Self::Stats,
        Self::Suggest,
        Self::Help,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::LoggingEnable => "logging_enable",
            Self::LoggingDisable => "logging_disable",
            Self::LoggingSettings => "logging_settings",
            Self::LoggingChannel => "logging_channel",
            Self::Authorise => "authorise",
            Self::Unauthorise => "unauthorise",
            Self::SetEmbedColour => "set_embed_colour",
            Self::SetBio => "set_bio",
            Self::ChangeAvatar => "change_avatar",
            Self::ResetTable => "reset_table",
            Self::DeleteTable => "delete_table",
            Self::Load => "load",
            Self::Unload => "unload",
            Self::Reload => "reload",
            Self::Stats => "stats",
            Self::Suggest => "suggest",
            Self::Help => "help",
        }
    }

    /// Description shown in the command picker and on the help pages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::LoggingEnable => "Enable logging for specific events",
            Self::LoggingDisable => "Disable logging for specific events",
            Self::LoggingSettings => "View current logging settings",
            Self::LoggingChannel => "Set the channel that receives log messages",
            Self::Authorise => "Allow a user to use admin commands in this server",
            Self::Unauthorise => "Revoke a user's access to admin commands in this server",
            Self::SetEmbedColour => "Set the embed colour used in this server",
            Self::SetBio => "Set the bot's activity",
            Self::ChangeAvatar => "Change the bot's avatar",
            Self::ResetTable => "Delete every row of a table",
            Self::DeleteTable => "Drop a table",
            Self::Load => "Load a module",
            Self::Unload => "Unload a module",
            Self::Reload => "Reload a module",
            Self::Stats => "Show bot statistics",
            Self::Suggest => "Submit a suggestion",
            Self::Help => "Display help information for all commands",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn access(&self) -> CommandAccess {
        match self {
            Self::LoggingEnable
            | Self::LoggingDisable
            | Self::LoggingSettings
            | Self::LoggingChannel
            | Self::SetEmbedColour => CommandAccess::Admin,
            Self::Authorise | Self::Unauthorise => CommandAccess::Administrator,
            Self::SetBio
            | Self::ChangeAvatar
            | Self::ResetTable
            | Self::DeleteTable
            | Self::Load
            | Self::Unload
            | Self::Reload => CommandAccess::Owner,
            Self::Stats | Self::Suggest | Self::Help => CommandAccess::Everyone,
        }
    }

    /// Feature module the command belongs to; `None` for the always-present admin commands.
    pub fn module(&self) -> Option<FeatureModule> {
        match self {
            Self::LoggingEnable
            | Self::LoggingDisable
            | Self::LoggingSettings
            | Self::LoggingChannel => Some(FeatureModule::Logging),
            Self::SetEmbedColour | Self::SetBio | Self::ChangeAvatar => {
                Some(FeatureModule::Customisation)
            }
            Self::Authorise | Self::Unauthorise | Self::Stats | Self::Suggest | Self::Help => {
                Some(FeatureModule::Utility)
            }
            Self::ResetTable | Self::DeleteTable | Self::Load | Self::Unload | Self::Reload => None,
        }
    }

    /// Whether the response is deferred before the handler runs.
    pub fn defers(&self) -> bool {
        matches!(
            self,
            Self::ChangeAvatar | Self::ResetTable | Self::DeleteTable
        )
    }

    pub fn definition(&self) -> CreateCommand {
        let command = match self {
            Self::LoggingEnable
            | Self::LoggingDisable
            | Self::LoggingSettings
            | Self::Stats
            | Self::Help => CreateCommand::new(self.name()),
            Self::LoggingChannel => logging::register_channel(),
            Self::Authorise => permission::register_authorise(),
            Self::Unauthorise => permission::register_unauthorise(),
            Self::SetEmbedColour => customisation::register_set_embed_colour(),
            Self::SetBio => customisation::register_set_bio(),
            Self::ChangeAvatar => customisation::register_change_avatar(),
            Self::ResetTable => admin::register_reset_table(),
            Self::DeleteTable => admin::register_delete_table(),
            Self::Load => admin::register_load(),
            Self::Unload => admin::register_unload(),
            Self::Reload => admin::register_reload(),
            Self::Suggest => utility::register_suggest(),
        };

        command.description(self.description())
    }
}

/// Commands exposed while the given modules are loaded.
pub fn commands_for(loaded: &[FeatureModule]) -> Vec<BotCommand> {
    BotCommand::ALL
        .into_iter()
        .filter(|command| command.module().map_or(true, |module| loaded.contains(&module)))
        .collect()
}

/// Registers the commands of every loaded module.
///
/// Commands go to `TEST_GUILD_ID` when configured so changes show up immediately,
/// otherwise they are registered globally.
///
/// # Returns
/// - `Ok(usize)` - Number of commands registered
/// - `Err(AppError)` - Discord rejected the registration
pub async fn register_commands(state: &BotState, ctx: &Context) -> Result<usize, AppError> {
    let definitions: Vec<CreateCommand> = commands_for(&state.modules.loaded().await)
        .iter()
        .map(BotCommand::definition)
        .collect();

    let registered = match state.config.test_guild_id {
        Some(guild_id) => {
            GuildId::new(guild_id)
                .set_commands(&ctx.http, definitions)
                .await?
        }
        None => Command::set_global_commands(&ctx.http, definitions).await?,
    };

    tracing::info!("Registered {} commands", registered.len());

    Ok(registered.len())
}

pub(crate) fn require_guild(guild_id: Option<GuildId>) -> Result<u64, AppError> {
    guild_id
        .map(|id| id.get())
        .ok_or_else(|| AuthError::GuildOnly.into())
}

fn invoker(user: &User, guild_id: Option<GuildId>, member: Option<&Member>) -> Invoker {
    Invoker {
        user_id: user.id.get(),
        guild_id: guild_id.map(|id| id.get()),
        is_administrator: member
            .and_then(|member| member.permissions)
            .is_some_and(|permissions| permissions.administrator()),
    }
}

async fn gate(
    state: &BotState,
    access: CommandAccess,
    module: Option<FeatureModule>,
    invoker: &Invoker,
) -> Result<(), AppError> {
    PermissionService::new(&state.db, state.config.owner_id)
        .check_access(access, invoker)
        .await?;

    if let Some(module) = module {
        if !state.modules.is_loaded(module).await {
            return Err(AppError::BadRequest(format!(
                "`Error: The {} module is not loaded.`",
                module
            )));
        }
    }

    Ok(())
}

async fn run(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
    command: BotCommand,
) -> Result<Reply, AppError> {
    match command {
        BotCommand::LoggingEnable => logging::enable_or_disable(state, interaction, true).await,
        BotCommand::LoggingDisable => logging::enable_or_disable(state, interaction, false).await,
        BotCommand::LoggingSettings => logging::settings(state, interaction).await,
        BotCommand::LoggingChannel => logging::set_channel(state, interaction).await,
        BotCommand::Authorise => permission::set_authorised(state, interaction, true).await,
        BotCommand::Unauthorise => permission::set_authorised(state, interaction, false).await,
        BotCommand::SetEmbedColour => customisation::set_embed_colour(state, interaction).await,
        BotCommand::SetBio => customisation::set_bio(state, ctx, interaction).await,
        BotCommand::ChangeAvatar => customisation::change_avatar(state, ctx, interaction).await,
        BotCommand::ResetTable => admin::reset_table(state, interaction).await,
        BotCommand::DeleteTable => admin::delete_table(state, interaction).await,
        BotCommand::Load => admin::load(state, ctx, interaction).await,
        BotCommand::Unload => admin::unload(state, ctx, interaction).await,
        BotCommand::Reload => admin::reload(state, ctx, interaction).await,
        BotCommand::Stats => utility::stats(state, ctx, interaction).await,
        BotCommand::Suggest => utility::suggest(state, ctx, interaction).await,
        BotCommand::Help => help::help(state, interaction).await,
    }
}

/// Runs a slash command end to end and records its usage.
pub async fn dispatch(state: &BotState, ctx: &Context, interaction: &CommandInteraction) {
    let Some(command) = BotCommand::from_name(&interaction.data.name) else {
        tracing::warn!("Received unknown command '{}'", interaction.data.name);
        return;
    };

    let invoker = invoker(
        &interaction.user,
        interaction.guild_id,
        interaction.member.as_deref(),
    );

    let mut deferred = false;
    let result = match gate(state, command.access(), command.module(), &invoker).await {
        Ok(()) => {
            if command.defers() {
                match interaction.defer_ephemeral(&ctx.http).await {
                    Ok(()) => deferred = true,
                    Err(e) => tracing::error!("Failed to defer /{}: {}", command.name(), e),
                }
            }
            run(state, ctx, interaction, command).await
        }
        Err(e) => {
            tracing::info!(
                "Denied /{} for user {}: {}",
                command.name(),
                invoker.user_id,
                e
            );
            Err(e)
        }
    };

    let reply = result.unwrap_or_else(|e| Reply::text(e.user_message()));
    if let Err(e) = reply::send(ctx, interaction, reply, deferred).await {
        tracing::error!("Failed to reply to /{}: {}", command.name(), e);
    }

    let notifier = DiscordNotifier::new(ctx.http.clone());
    CommandUsageService::new(&state.db, &notifier)
        .record(&usage_of(interaction))
        .await;
}

/// Handles the logging selection menus, help page buttons and the suggestion blacklist button.
pub async fn dispatch_component(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
) {
    let custom_id = component.data.custom_id.as_str();
    let invoker = invoker(&component.user, component.guild_id, component.member.as_ref());

    let response = if let Some(enabled) = logging::selection_action(custom_id) {
        match gate(
            state,
            CommandAccess::Admin,
            Some(FeatureModule::Logging),
            &invoker,
        )
        .await
        {
            Ok(()) => logging::apply_selection(state, component, enabled)
                .await
                .map(Reply::into_update),
            Err(e) => Err(e),
        }
    } else if let Some(user_id) = parse_blacklist_button(custom_id) {
        match gate(state, CommandAccess::Owner, None, &invoker).await {
            Ok(()) => utility::blacklist(state, ctx, user_id)
                .await
                .map(Reply::into_response),
            Err(e) => Err(e),
        }
    } else if let Some(navigation) = help::HelpNavigation::parse(custom_id) {
        match gate(
            state,
            CommandAccess::Everyone,
            Some(FeatureModule::Utility),
            &invoker,
        )
        .await
        {
            Ok(()) => help::navigate(state, &invoker, component.guild_id, navigation)
                .await
                .map(Reply::into_update),
            Err(e) => Err(e),
        }
    } else {
        tracing::warn!("Received unknown component '{}'", custom_id);
        return;
    };

    let response = response.unwrap_or_else(|e| Reply::text(e.user_message()).into_response());
    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to component '{}': {}", custom_id, e);
    }
}

fn usage_of(interaction: &CommandInteraction) -> CommandUsage {
    CommandUsage {
        command_name: interaction.data.name.clone(),
        options: interaction
            .data
            .options
            .iter()
            .map(|option| (option.name.clone(), options::render_value(&option.value)))
            .collect(),
        invoker: Actor::from(&interaction.user),
        guild_id: interaction.guild_id.map(|id| id.get()),
        channel_id: interaction.channel_id.get(),
    }
}
