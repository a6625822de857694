use crate::model::audit::Notification;

/// Bot-wide counters shown by `/stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotStats {
    pub servers: usize,
    pub users: u64,
    /// Gateway heartbeat latency in milliseconds, unknown until the first heartbeat.
    pub ping_ms: Option<u128>,
    pub items_collected: i64,
    pub items_destroyed: i64,
    pub uptime: String,
}

impl BotStats {
    pub fn to_notification(&self, colour: u32) -> Notification {
        Notification::new("Bot Statistics", colour)
            .field("🧑 Users", format!("┕ `{}`", self.users), true)
            .field("🏡 Servers", format!("┕ `{}`", self.servers), true)
            .field("🏓 Ping", format!("┕ `{}`", self.ping_label()), true)
            .field("⏳ Uptime", format!("┕ `{}`", self.uptime), true)
            .field("📦 Items collected", format!("┕ `{}`", self.items_collected), true)
            .field("💥 Items destroyed", format!("┕ `{}`", self.items_destroyed), true)
    }

    fn ping_label(&self) -> String {
        match self.ping_ms {
            Some(ms) => format!("{} ms", ms),
            None => "N/A".to_string(),
        }
    }
}

/// Sums over every `item_stats` row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemTotals {
    pub collected: i64,
    pub destroyed: i64,
}
