use crate::model::audit::Actor;
use crate::model::usage::CommandUsage;
use crate::service::test::RecordingNotifier;
use crate::service::usage::{CommandUsageService, FALLBACK_LOG_CHANNEL};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod record;

fn usage(guild_id: Option<u64>) -> CommandUsage {
    CommandUsage {
        command_name: "logging_settings".to_string(),
        options: Vec::new(),
        invoker: Actor::from_id(42),
        guild_id,
        channel_id: 10,
    }
}
