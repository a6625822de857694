//! State shared by every event and command handler.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::service::module::ModuleRegistry;

/// Shared resources handed to the gateway event handler.
///
/// Initialized once during startup. Every field is cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Config` is behind an `Arc`
/// - `ModuleRegistry` shares its loaded set through an `Arc`
/// - `reqwest::Client` uses an `Arc` internally
#[derive(Clone)]
pub struct BotState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    /// Feature modules currently enabled at runtime.
    pub modules: ModuleRegistry,
    pub http_client: reqwest::Client,
    /// Process start time, reported by `/stats`.
    pub started_at: DateTime<Utc>,
}

impl BotState {
    pub fn new(
        db: DatabaseConnection,
        config: Config,
        modules: ModuleRegistry,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            db,
            config: Arc::new(config),
            modules,
            http_client,
            started_at: Utc::now(),
        }
    }
}
