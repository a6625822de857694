use super::*;

/// Tests recording to the configured log channel.
///
/// Expected: Some(configured channel) with one record sent
#[tokio::test]
async fn posts_to_configured_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_guild_config(db, "1", 500).await?;

    let notifier = RecordingNotifier::new().with_channel(1, FALLBACK_LOG_CHANNEL, 600);
    let service = CommandUsageService::new(db, &notifier);

    assert_eq!(service.record(&usage(Some(1))).await, Some(500));

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1.description, "Command: `logging_settings`");

    Ok(())
}

/// Tests recording in a guild without a configured channel.
///
/// Expected: Some(fallback channel)
#[tokio::test]
async fn falls_back_to_named_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new().with_channel(1, FALLBACK_LOG_CHANNEL, 600);
    let service = CommandUsageService::new(db, &notifier);

    assert_eq!(service.record(&usage(Some(1))).await, Some(600));

    Ok(())
}

/// Tests recording when the configured channel was deleted.
///
/// Expected: Some(fallback channel)
#[tokio::test]
async fn falls_back_when_configured_channel_is_gone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_guild_config(db, "1", 500).await?;

    let notifier = RecordingNotifier::new()
        .with_unavailable(500)
        .with_channel(1, FALLBACK_LOG_CHANNEL, 600);
    let service = CommandUsageService::new(db, &notifier);

    assert_eq!(service.record(&usage(Some(1))).await, Some(600));
    assert_eq!(notifier.sent().len(), 1);

    Ok(())
}

/// Tests recording in a guild with neither channel.
///
/// Expected: None with nothing sent
#[tokio::test]
async fn no_destination_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let service = CommandUsageService::new(db, &notifier);

    assert_eq!(service.record(&usage(Some(1))).await, None);
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests recording a command used in a direct message.
///
/// Expected: None
#[tokio::test]
async fn direct_messages_are_not_posted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let service = CommandUsageService::new(db, &notifier);

    assert_eq!(service.record(&usage(None)).await, None);

    Ok(())
}

/// Tests that a database failure still tries the fallback channel.
///
/// Expected: Some(fallback channel)
#[tokio::test]
async fn database_failure_uses_fallback() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new().with_channel(1, FALLBACK_LOG_CHANNEL, 600);
    let service = CommandUsageService::new(db, &notifier);

    assert_eq!(service.record(&usage(Some(1))).await, Some(600));

    Ok(())
}
