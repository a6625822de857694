//! `/stats`, `/suggest` and the suggestion blacklist button.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::command::{options, reply::Reply};
use crate::bot::start::ShardManagerContainer;
use crate::error::AppError;
use crate::model::setting::DEFAULT_EMBED_COLOUR;
use crate::service::customisation::CustomisationService;
use crate::service::notifier::DiscordNotifier;
use crate::service::stats::StatsService;
use crate::service::suggestion::{Suggestion, SuggestionService};
use crate::state::BotState;

pub fn register_suggest() -> CreateCommand {
    CreateCommand::new("suggest")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "title", "Suggestion title")
                .required(true)
                .max_length(100),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "suggestion", "Your suggestion")
                .required(true)
                .max_length(1000),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "details",
                "Additional information",
            )
            .max_length(1000),
        )
}

pub async fn stats(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let guild_ids = ctx.cache.guilds();
    let users: u64 = guild_ids
        .iter()
        .filter_map(|guild_id| ctx.cache.guild(*guild_id).map(|guild| guild.member_count))
        .sum();

    let shard_manager = ctx.data.read().await.get::<ShardManagerContainer>().cloned();
    let latency = match shard_manager {
        Some(manager) => manager
            .runners
            .lock()
            .await
            .get(&ctx.shard_id)
            .and_then(|runner| runner.latency),
        None => None,
    };

    let stats = StatsService::new(&state.db)
        .collect(guild_ids.len(), users, latency, state.started_at)
        .await?;

    let colour = match interaction.guild_id {
        Some(guild_id) => {
            CustomisationService::new(&state.db)
                .embed_colour(guild_id.get())
                .await
        }
        None => DEFAULT_EMBED_COLOUR,
    };

    Ok(Reply::embed(&stats.to_notification(colour)))
}

pub async fn suggest(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let suggestion = Suggestion {
        title: options::string(interaction, "title")?,
        body: options::string(interaction, "suggestion")?,
        details: options::optional_string(interaction, "details"),
    };

    let notifier = DiscordNotifier::new(ctx.http.clone());
    SuggestionService::new(&state.db, &notifier, state.config.suggestion_channel_id)
        .submit(
            interaction.user.id.get(),
            interaction.user.display_name(),
            interaction.guild_id.map(|id| id.get()),
            &suggestion,
        )
        .await?;

    Ok(Reply::text("Your suggestion has been submitted successfully!"))
}

/// Handles the "Blacklist User" button attached to posted suggestions.
pub async fn blacklist(
    state: &BotState,
    ctx: &Context,
    user_id: u64,
) -> Result<Reply, AppError> {
    let notifier = DiscordNotifier::new(ctx.http.clone());
    SuggestionService::new(&state.db, &notifier, state.config.suggestion_channel_id)
        .blacklist(user_id)
        .await?;

    Ok(Reply::text("User has been blacklisted from making suggestions."))
}
