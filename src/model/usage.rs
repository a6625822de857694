use crate::model::audit::{Actor, Notification, COLOUR_BLUE};

/// A record of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandUsage {
    pub command_name: String,
    /// Option name and rendered value, in the order the user supplied them.
    pub options: Vec<(String, String)>,
    pub invoker: Actor,
    pub guild_id: Option<u64>,
    pub channel_id: u64,
}

impl CommandUsage {
    /// Builds the usage log embed.
    pub fn to_notification(&self) -> Notification {
        let guild = self
            .guild_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "DM".to_string());

        let mut notification =
            Notification::new(format!("Command: `{}`", self.command_name), COLOUR_BLUE)
                .field("User", self.invoker.mention(), true)
                .field("Guild ID", guild, true)
                .field("Channel", format!("<#{}>", self.channel_id), true);

        if !self.options.is_empty() {
            let rendered = self
                .options
                .iter()
                .map(|(name, value)| format!("{}: {}", name, value))
                .collect::<Vec<_>>()
                .join("\n");
            notification = notification.field("Command Options", rendered, false);
        }

        notification
            .footer(format!("User ID: {}", self.invoker.id))
            .author(&self.invoker)
    }
}
