use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::notify::NotifyError;
use crate::model::audit::Notification;
use crate::service::notifier::Notifier;

mod audit;
mod customisation;
mod logging;
mod permission;
mod stats;
mod usage;

/// Notifier that records every delivery instead of calling Discord.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(u64, Notification)>>,
    unavailable: HashSet<u64>,
    channels: HashMap<(u64, String), u64>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sends to the channel fail as if it was deleted.
    pub fn with_unavailable(mut self, channel_id: u64) -> Self {
        self.unavailable.insert(channel_id);
        self
    }

    /// Adds a named text channel to a guild.
    pub fn with_channel(mut self, guild_id: u64, name: &str, channel_id: u64) -> Self {
        self.channels.insert((guild_id, name.to_string()), channel_id);
        self
    }

    pub fn sent(&self) -> Vec<(u64, Notification)> {
        self.sent.lock().unwrap().clone()
    }
}

#[serenity::async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, channel_id: u64, notification: &Notification) -> Result<(), NotifyError> {
        if self.unavailable.contains(&channel_id) {
            return Err(NotifyError::ChannelUnavailable(channel_id));
        }

        self.sent
            .lock()
            .unwrap()
            .push((channel_id, notification.clone()));

        Ok(())
    }

    async fn find_text_channel(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<u64>, NotifyError> {
        Ok(self.channels.get(&(guild_id, name.to_string())).copied())
    }
}
