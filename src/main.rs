mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use crate::{
    config::Config, error::AppError, service::module::ModuleRegistry, state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client();

    let modules = ModuleRegistry::new();
    modules.load_all(&db).await?;

    tracing::info!("Starting guildlog");

    let state = BotState::new(db, config, modules, http_client);
    let client = bot::start::init_bot(state).await?;

    // Gateway runs until shutdown
    let bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    if let Err(e) = bot_task.await {
        tracing::error!("Discord bot task failed: {}", e);
    }

    Ok(())
}
