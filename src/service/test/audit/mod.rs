use crate::model::audit::{
    Actor, AuditEvent, ChannelSnapshot, COLOUR_BLUE, COLOUR_GREEN, COLOUR_RED,
};
use crate::service::audit::{build_notification, AuditLogService, AuditOutcome, CONTENT_UNAVAILABLE};
use crate::service::test::RecordingNotifier;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod handle;

const GUILD_ID: u64 = 123456789;
const LOG_CHANNEL_ID: u64 = 555;

fn alice() -> Actor {
    Actor {
        id: 42,
        tag: "alice".to_string(),
        avatar_url: Some("https://cdn.discordapp.com/avatars/42/a.png".to_string()),
    }
}

fn message_deleted(content: Option<&str>) -> AuditEvent {
    AuditEvent::MessageDeleted {
        guild_id: GUILD_ID,
        channel_id: 77,
        author: Some(alice()),
        content: content.map(str::to_string),
    }
}

fn channel(name: &str, category_id: Option<u64>, position: u16) -> ChannelSnapshot {
    ChannelSnapshot {
        id: 900,
        name: name.to_string(),
        kind: "text".to_string(),
        category_id,
        category_name: None,
        position,
    }
}
