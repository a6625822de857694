//! Guild events reported by the audit logger and the notifications built from them.
//!
//! Event payloads are platform independent so the audit logic can be exercised
//! without a gateway connection; `bot::handler` converts Serenity models into them.

use chrono::{DateTime, Utc};
use serenity::all::{GuildChannel, User};

use crate::model::logging::LogEvent;

pub const COLOUR_GREEN: u32 = 0x2ECC71;
pub const COLOUR_RED: u32 = 0xE74C3C;
pub const COLOUR_BLUE: u32 = 0x3498DB;

/// Discord rejects embed field values longer than this.
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Shortens text to at most `limit` characters, marking the cut with `…`.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut shortened: String = text.chars().take(limit.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}

/// The user an event or command is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: u64,
    /// `username` or legacy `username#1234`.
    pub tag: String,
    pub avatar_url: Option<String>,
}

impl Actor {
    /// An actor known only by id, used when the platform did not send user details.
    pub fn from_id(id: u64) -> Self {
        Self {
            id,
            tag: id.to_string(),
            avatar_url: None,
        }
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            tag: user.tag(),
            avatar_url: Some(user.face()),
        }
    }
}

/// The parts of a guild channel the audit logger reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSnapshot {
    pub id: u64,
    pub name: String,
    /// Platform channel type name such as `text` or `voice`.
    pub kind: String,
    pub category_id: Option<u64>,
    /// Resolved category name, when the category was cached.
    pub category_name: Option<String>,
    pub position: u16,
}

impl ChannelSnapshot {
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }

    fn category_label(&self) -> String {
        match (&self.category_name, self.category_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => id.to_string(),
            (None, None) => "None".to_string(),
        }
    }

    /// Lists the tracked properties that differ between two snapshots.
    ///
    /// Only name, category and position are compared; each change renders as
    /// ``Name: `old` → `new` ``.
    pub fn changes_since(&self, before: &ChannelSnapshot) -> Vec<String> {
        let mut changes = Vec::new();

        if before.name != self.name {
            changes.push(format!("Name: `{}` → `{}`", before.name, self.name));
        }
        if before.category_id != self.category_id {
            changes.push(format!(
                "Category: `{}` → `{}`",
                before.category_label(),
                self.category_label()
            ));
        }
        if before.position != self.position {
            changes.push(format!(
                "Position: `{}` → `{}`",
                before.position, self.position
            ));
        }

        changes
    }
}

impl From<&GuildChannel> for ChannelSnapshot {
    fn from(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id.get(),
            name: channel.name.clone(),
            kind: channel.kind.name().to_string(),
            category_id: channel.parent_id.map(|id| id.get()),
            category_name: None,
            position: channel.position,
        }
    }
}

/// How a member's voice connection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTransition {
    Join,
    Leave,
    Move,
    /// Same channel (or none on both sides), e.g. mute or deafen toggles.
    Other,
}

impl VoiceTransition {
    pub fn classify(before: Option<u64>, after: Option<u64>) -> Self {
        match (before, after) {
            (None, Some(_)) => Self::Join,
            (Some(_), None) => Self::Leave,
            (Some(from), Some(to)) if from != to => Self::Move,
            _ => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Join => "Joined Voice Channel",
            Self::Leave => "Left Voice Channel",
            Self::Move => "Moved Voice Channels",
            Self::Other => "Voice State Updated",
        }
    }
}

/// A guild lifecycle event the audit logger may report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    MemberJoined {
        guild_id: u64,
        member: Actor,
    },
    MemberLeft {
        guild_id: u64,
        member: Actor,
    },
    MessageEdited {
        guild_id: u64,
        channel_id: u64,
        author: Actor,
        before: Option<String>,
        after: Option<String>,
    },
    MessageDeleted {
        guild_id: u64,
        channel_id: u64,
        /// Missing when the message was not cached.
        author: Option<Actor>,
        content: Option<String>,
    },
    VoiceStateUpdated {
        guild_id: u64,
        member: Actor,
        before_channel: Option<u64>,
        after_channel: Option<u64>,
    },
    ChannelCreated {
        guild_id: u64,
        channel: ChannelSnapshot,
    },
    ChannelDeleted {
        guild_id: u64,
        channel: ChannelSnapshot,
    },
    ChannelUpdated {
        guild_id: u64,
        /// Missing when the previous state was not cached.
        before: Option<ChannelSnapshot>,
        after: ChannelSnapshot,
    },
}

impl AuditEvent {
    pub fn guild_id(&self) -> u64 {
        match self {
            Self::MemberJoined { guild_id, .. }
            | Self::MemberLeft { guild_id, .. }
            | Self::MessageEdited { guild_id, .. }
            | Self::MessageDeleted { guild_id, .. }
            | Self::VoiceStateUpdated { guild_id, .. }
            | Self::ChannelCreated { guild_id, .. }
            | Self::ChannelDeleted { guild_id, .. }
            | Self::ChannelUpdated { guild_id, .. } => *guild_id,
        }
    }

    /// The logging flag that gates this event.
    pub fn kind(&self) -> LogEvent {
        match self {
            Self::MemberJoined { .. } => LogEvent::MemberJoin,
            Self::MemberLeft { .. } => LogEvent::MemberRemove,
            Self::MessageEdited { .. } => LogEvent::MessageEdit,
            Self::MessageDeleted { .. } => LogEvent::MessageDelete,
            Self::VoiceStateUpdated { .. } => LogEvent::VoiceStateUpdate,
            Self::ChannelCreated { .. } => LogEvent::ChannelCreate,
            Self::ChannelDeleted { .. } => LogEvent::ChannelDelete,
            Self::ChannelUpdated { .. } => LogEvent::ChannelUpdate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A button attached below the embed, handled by the component dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationButton {
    pub custom_id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAuthor {
    pub name: String,
    pub icon_url: Option<String>,
}

/// A structured, platform-independent embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: Option<String>,
    pub description: String,
    pub colour: u32,
    pub fields: Vec<NotificationField>,
    pub footer: Option<String>,
    pub author: Option<NotificationAuthor>,
    pub button: Option<NotificationButton>,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(description: impl Into<String>, colour: u32) -> Self {
        Self {
            title: None,
            description: description.into(),
            colour,
            fields: Vec::new(),
            footer: None,
            author: None,
            button: None,
            timestamp: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a field, shortening the value to [`FIELD_VALUE_LIMIT`] characters.
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(NotificationField {
            name: name.into(),
            value: truncate(&value.into(), FIELD_VALUE_LIMIT),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn author(mut self, actor: &Actor) -> Self {
        self.author = Some(NotificationAuthor {
            name: actor.tag.clone(),
            icon_url: actor.avatar_url.clone(),
        });
        self
    }

    pub fn button(mut self, custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        self.button = Some(NotificationButton {
            custom_id: custom_id.into(),
            label: label.into(),
        });
        self
    }

    /// Value of the first field with the given name.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}
