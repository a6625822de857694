//! Owner-only administration: destructive table commands and feature modules.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::command::{options, register_commands, reply::Reply};
use crate::error::AppError;
use crate::model::module::FeatureModule;
use crate::model::table::ManagedTable;
use crate::service::table::TableService;
use crate::state::BotState;

fn table_option() -> CreateCommandOption {
    ManagedTable::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "table", "Table name").required(true),
        |option, table| option.add_string_choice(table.name(), table.name()),
    )
}

fn module_option() -> CreateCommandOption {
    FeatureModule::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "module", "Module name")
            .required(true),
        |option, module| option.add_string_choice(module.name(), module.name()),
    )
}

pub fn register_reset_table() -> CreateCommand {
    CreateCommand::new("reset_table").add_option(table_option())
}

pub fn register_delete_table() -> CreateCommand {
    CreateCommand::new("delete_table").add_option(table_option())
}

pub fn register_load() -> CreateCommand {
    CreateCommand::new("load").add_option(module_option())
}

pub fn register_unload() -> CreateCommand {
    CreateCommand::new("unload").add_option(module_option())
}

pub fn register_reload() -> CreateCommand {
    CreateCommand::new("reload").add_option(module_option())
}

pub async fn reset_table(
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let name = options::string(interaction, "table")?;

    let table = TableService::new(&state.db).reset(&name).await?;

    Ok(Reply::text(format!("`Success: {} table has been reset`", table)))
}

pub async fn delete_table(
    state: &BotState,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let name = options::string(interaction, "table")?;

    let table = TableService::new(&state.db).delete(&name).await?;

    Ok(Reply::text(format!("`Success: {} table has been deleted`", table)))
}

pub async fn load(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let name = options::string(interaction, "module")?;

    let module = state.modules.load(&state.db, &name).await?;
    refresh_commands(state, ctx).await;

    Ok(Reply::text(format!("`Success: Loaded {}`", module)))
}

pub async fn unload(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let name = options::string(interaction, "module")?;

    let module = state.modules.unload(&name).await?;
    refresh_commands(state, ctx).await;

    Ok(Reply::text(format!("`Success: Unloaded {}`", module)))
}

pub async fn reload(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let name = options::string(interaction, "module")?;

    let module = state.modules.reload(&state.db, &name).await?;
    refresh_commands(state, ctx).await;

    Ok(Reply::text(format!("Reloaded {}.", module)))
}

/// The module change already took effect, so a failed re-registration is only logged.
async fn refresh_commands(state: &BotState, ctx: &Context) {
    if let Err(e) = register_commands(state, ctx).await {
        tracing::error!("Failed to re-register commands: {}", e);
    }
}
