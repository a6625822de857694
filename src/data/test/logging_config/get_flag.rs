use super::*;

/// Tests reading a flag for a guild without a logging config row.
///
/// Verifies that every event kind defaults to disabled when the guild
/// has never configured logging.
///
/// Expected: Ok(false) for all eight events
#[tokio::test]
async fn defaults_to_disabled_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoggingConfigRepository::new(db);

    for event in LogEvent::ALL {
        assert!(!repo.get_flag(123456789, event).await?);
    }

    Ok(())
}

/// Tests reading flags from an existing row.
///
/// Verifies that each flag is read from its own column.
///
/// Expected: Ok(true) only for message_delete
#[tokio::test]
async fn reads_stored_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::logging_config::LoggingConfigFactory::new(db)
        .guild_id("123456789")
        .message_delete(true)
        .build()
        .await?;

    let repo = LoggingConfigRepository::new(db);

    assert!(repo.get_flag(123456789, LogEvent::MessageDelete).await?);
    assert!(!repo.get_flag(123456789, LogEvent::MessageEdit).await?);
    assert!(!repo.get_flag(123456789, LogEvent::ChannelUpdate).await?);

    Ok(())
}

/// Tests that flags are scoped per guild.
///
/// Expected: Ok(false) for a guild other than the configured one
#[tokio::test]
async fn does_not_read_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::logging_config::LoggingConfigFactory::new(db)
        .guild_id("111")
        .all(true)
        .build()
        .await?;

    let repo = LoggingConfigRepository::new(db);

    assert!(!repo.get_flag(222, LogEvent::MemberJoin).await?);

    Ok(())
}
