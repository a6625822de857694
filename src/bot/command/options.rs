//! Typed access to slash command options.

use serenity::all::{CommandDataOptionValue, CommandInteraction, User};

use crate::error::AppError;

fn find<'a>(interaction: &'a CommandInteraction, name: &str) -> Option<&'a CommandDataOptionValue> {
    interaction
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

fn missing(name: &str) -> AppError {
    AppError::BadRequest(format!("`Error: Missing option {}`", name))
}

/// A required string option.
pub fn string(interaction: &CommandInteraction, name: &str) -> Result<String, AppError> {
    optional_string(interaction, name).ok_or_else(|| missing(name))
}

pub fn optional_string(interaction: &CommandInteraction, name: &str) -> Option<String> {
    match find(interaction, name) {
        Some(CommandDataOptionValue::String(value)) => Some(value.clone()),
        _ => None,
    }
}

/// A required user option, resolved from the interaction payload.
pub fn user(interaction: &CommandInteraction, name: &str) -> Result<User, AppError> {
    let Some(CommandDataOptionValue::User(user_id)) = find(interaction, name) else {
        return Err(missing(name));
    };

    interaction
        .data
        .resolved
        .users
        .get(user_id)
        .cloned()
        .ok_or_else(|| missing(name))
}

/// A required channel option as a raw id.
pub fn channel_id(interaction: &CommandInteraction, name: &str) -> Result<u64, AppError> {
    match find(interaction, name) {
        Some(CommandDataOptionValue::Channel(channel_id)) => Ok(channel_id.get()),
        _ => Err(missing(name)),
    }
}

/// Renders an option value the way it was submitted, ids as plain numbers.
pub fn render_value(value: &CommandDataOptionValue) -> String {
    match value {
        CommandDataOptionValue::String(value) => value.clone(),
        CommandDataOptionValue::Integer(value) => value.to_string(),
        CommandDataOptionValue::Number(value) => value.to_string(),
        CommandDataOptionValue::Boolean(value) => value.to_string(),
        CommandDataOptionValue::User(id) => id.to_string(),
        CommandDataOptionValue::Channel(id) => id.to_string(),
        CommandDataOptionValue::Role(id) => id.to_string(),
        CommandDataOptionValue::Mentionable(id) => id.to_string(),
        CommandDataOptionValue::Attachment(id) => id.to_string(),
        _ => "Not provided".to_string(),
    }
}
