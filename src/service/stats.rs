use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::data::ItemStatsRepository;
use crate::error::AppError;
use crate::model::stats::BotStats;
use crate::util::time::format_uptime;

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gathers bot-wide statistics.
    ///
    /// # Arguments
    /// - `servers` - Number of guilds the bot is in
    /// - `users` - Sum of member counts over those guilds
    /// - `latency` - Gateway heartbeat latency, if measured yet
    /// - `started_at` - When the process started
    pub async fn collect(
        &self,
        servers: usize,
        users: u64,
        latency: Option<std::time::Duration>,
        started_at: DateTime<Utc>,
    ) -> Result<BotStats, AppError> {
        let totals = ItemStatsRepository::new(self.db).totals().await?;

        Ok(BotStats {
            servers,
            users,
            ping_ms: latency.map(|latency| latency.as_millis()),
            items_collected: totals.collected,
            items_destroyed: totals.destroyed,
            uptime: format_uptime(Utc::now() - started_at),
        })
    }
}
