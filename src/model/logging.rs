use std::fmt;

use crate::error::AppError;
use crate::util::parse::parse_stored_id;

/// Select-menu value that enables or disables every event kind at once.
pub const ALL_EVENTS_VALUE: &str = "all";

/// The guild events the audit logger can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogEvent {
    MemberJoin,
    MemberRemove,
    MessageEdit,
    MessageDelete,
    VoiceStateUpdate,
    ChannelCreate,
    ChannelDelete,
    ChannelUpdate,
}

impl LogEvent {
    pub const ALL: [LogEvent; 8] = [
        LogEvent::MemberJoin,
        LogEvent::MemberRemove,
        LogEvent::MessageEdit,
        LogEvent::MessageDelete,
        LogEvent::VoiceStateUpdate,
        LogEvent::ChannelCreate,
        LogEvent::ChannelDelete,
        LogEvent::ChannelUpdate,
    ];

    /// Stable identifier, also the `logging_config` column name.
    pub fn id(&self) -> &'static str {
        match self {
            Self::MemberJoin => "member_join",
            Self::MemberRemove => "member_remove",
            Self::MessageEdit => "message_edit",
            Self::MessageDelete => "message_delete",
            Self::VoiceStateUpdate => "voice_state_update",
            Self::ChannelCreate => "guild_channel_create",
            Self::ChannelDelete => "guild_channel_delete",
            Self::ChannelUpdate => "guild_channel_update",
        }
    }

    /// Human label shown in the select menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MemberJoin => "Member Join",
            Self::MemberRemove => "Member Remove",
            Self::MessageEdit => "Message Edit",
            Self::MessageDelete => "Message Delete",
            Self::VoiceStateUpdate => "Voice State Update",
            Self::ChannelCreate => "Channel Create",
            Self::ChannelDelete => "Channel Delete",
            Self::ChannelUpdate => "Channel Update",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.id() == id)
    }

    /// Column holding this event's flag.
    pub fn column(&self) -> entity::logging_config::Column {
        use entity::logging_config::Column;

        match self {
            Self::MemberJoin => Column::MemberJoin,
            Self::MemberRemove => Column::MemberRemove,
            Self::MessageEdit => Column::MessageEdit,
            Self::MessageDelete => Column::MessageDelete,
            Self::VoiceStateUpdate => Column::VoiceStateUpdate,
            Self::ChannelCreate => Column::GuildChannelCreate,
            Self::ChannelDelete => Column::GuildChannelDelete,
            Self::ChannelUpdate => Column::GuildChannelUpdate,
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Which event kinds an enable/disable request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEventSelection {
    All,
    Events(Vec<LogEvent>),
}

impl LogEventSelection {
    /// Parses the values submitted from the event select menu.
    ///
    /// The `all` sentinel wins over any individual events chosen alongside it.
    /// Duplicate values collapse to one.
    ///
    /// # Returns
    /// - `Ok(LogEventSelection)` - Parsed selection
    /// - `Err(AppError::BadRequest)` - No values, or a value that is not a known event
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Result<Self, AppError> {
        if values.iter().any(|v| v.as_ref() == ALL_EVENTS_VALUE) {
            return Ok(Self::All);
        }

        let mut events = Vec::new();
        for value in values {
            let event = LogEvent::from_id(value.as_ref()).ok_or_else(|| {
                AppError::BadRequest(format!("`Error: Unknown event type {}`", value.as_ref()))
            })?;
            if !events.contains(&event) {
                events.push(event);
            }
        }

        if events.is_empty() {
            return Err(AppError::BadRequest(
                "`Error: Select at least one event.`".to_string(),
            ));
        }

        Ok(Self::Events(events))
    }

    pub fn events(&self) -> Vec<LogEvent> {
        match self {
            Self::All => LogEvent::ALL.to_vec(),
            Self::Events(events) => events.clone(),
        }
    }
}

/// Per-guild audit log switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub guild_id: u64,
    pub member_join: bool,
    pub member_remove: bool,
    pub message_edit: bool,
    pub message_delete: bool,
    pub voice_state_update: bool,
    pub channel_create: bool,
    pub channel_delete: bool,
    pub channel_update: bool,
}

impl LoggingConfig {
    pub fn from_entity(entity: entity::logging_config::Model) -> Result<Self, sea_orm::DbErr> {
        Ok(Self {
            guild_id: parse_stored_id(&entity.guild_id)?,
            member_join: entity.member_join,
            member_remove: entity.member_remove,
            message_edit: entity.message_edit,
            message_delete: entity.message_delete,
            voice_state_update: entity.voice_state_update,
            channel_create: entity.guild_channel_create,
            channel_delete: entity.guild_channel_delete,
            channel_update: entity.guild_channel_update,
        })
    }

    pub fn is_enabled(&self, event: LogEvent) -> bool {
        match event {
            LogEvent::MemberJoin => self.member_join,
            LogEvent::MemberRemove => self.member_remove,
            LogEvent::MessageEdit => self.message_edit,
            LogEvent::MessageDelete => self.message_delete,
            LogEvent::VoiceStateUpdate => self.voice_state_update,
            LogEvent::ChannelCreate => self.channel_create,
            LogEvent::ChannelDelete => self.channel_delete,
            LogEvent::ChannelUpdate => self.channel_update,
        }
    }

    /// Every event kind paired with its current flag, in display order.
    pub fn flags(&self) -> Vec<(LogEvent, bool)> {
        LogEvent::ALL
            .into_iter()
            .map(|event| (event, self.is_enabled(event)))
            .collect()
    }
}
