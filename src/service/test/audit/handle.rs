use super::*;

/// Tests an event in a guild that never configured logging.
///
/// Expected: Disabled with nothing sent
#[tokio::test]
async fn disabled_without_config_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_logging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_guild_config(db, &GUILD_ID.to_string(), LOG_CHANNEL_ID).await?;

    let notifier = RecordingNotifier::new();
    let service = AuditLogService::new(db, &notifier);

    let outcome = service.handle(&message_deleted(Some("hello"))).await;

    assert_eq!(outcome, AuditOutcome::Disabled);
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests deleted messages in a guild logging only message deletions.
///
/// Verifies that a deletion with text produces exactly one embed naming the author,
/// the channel and the text, and that a deletion without text uses the placeholder.
///
/// Expected: Sent twice, content `*hello*` then the placeholder
#[tokio::test]
async fn reports_deleted_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_logging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::logging_config::LoggingConfigFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .message_delete(true)
        .build()
        .await?;
    factory::create_guild_config(db, &GUILD_ID.to_string(), LOG_CHANNEL_ID).await?;

    let notifier = RecordingNotifier::new();
    let service = AuditLogService::new(db, &notifier);

    let outcome = service.handle(&message_deleted(Some("hello"))).await;
    assert_eq!(outcome, AuditOutcome::Sent);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    let (channel_id, notification) = &sent[0];
    assert_eq!(*channel_id, LOG_CHANNEL_ID);
    assert_eq!(notification.description, "Action: `Message Deleted`");
    assert_eq!(notification.field_value("User"), Some("<@42>"));
    assert_eq!(notification.field_value("Channel"), Some("<#77>"));
    assert_eq!(notification.field_value("Content"), Some("*hello*"));

    service.handle(&message_deleted(None)).await;

    let sent = notifier.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].1.field_value("Content"), Some(CONTENT_UNAVAILABLE));

    Ok(())
}

/// Tests that only the flag of the event's own kind is consulted.
///
/// Expected: Disabled for a member join when only message deletions are logged
#[tokio::test]
async fn other_event_kinds_stay_disabled() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_logging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::logging_config::LoggingConfigFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .message_delete(true)
        .build()
        .await?;
    factory::create_guild_config(db, &GUILD_ID.to_string(), LOG_CHANNEL_ID).await?;

    let notifier = RecordingNotifier::new();
    let service = AuditLogService::new(db, &notifier);

    let outcome = service
        .handle(&AuditEvent::MemberJoined {
            guild_id: GUILD_ID,
            member: alice(),
        })
        .await;

    assert_eq!(outcome, AuditOutcome::Disabled);
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests an edit that did not change the message text.
///
/// Expected: Suppressed with nothing sent
#[tokio::test]
async fn suppresses_unchanged_edits() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_logging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::logging_config::LoggingConfigFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .all(true)
        .build()
        .await?;
    factory::create_guild_config(db, &GUILD_ID.to_string(), LOG_CHANNEL_ID).await?;

    let notifier = RecordingNotifier::new();
    let service = AuditLogService::new(db, &notifier);

    let outcome = service
        .handle(&AuditEvent::MessageEdited {
            guild_id: GUILD_ID,
            channel_id: 77,
            author: alice(),
            before: Some("same".to_string()),
            after: Some("same".to_string()),
        })
        .await;

    assert_eq!(outcome, AuditOutcome::Suppressed);
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests an enabled event in a guild without a log channel.
///
/// Expected: NoChannel with nothing sent
#[tokio::test]
async fn no_channel_configured() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_logging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::logging_config::LoggingConfigFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .all(true)
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let service = AuditLogService::new(db, &notifier);

    let outcome = service.handle(&message_deleted(Some("hello"))).await;

    assert_eq!(outcome, AuditOutcome::NoChannel);
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests a log channel that was deleted after being configured.
///
/// Expected: ChannelUnavailable, no panic or error
#[tokio::test]
async fn unavailable_channel_is_swallowed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_logging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::logging_config::LoggingConfigFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .all(true)
        .build()
        .await?;
    factory::create_guild_config(db, &GUILD_ID.to_string(), LOG_CHANNEL_ID).await?;

    let notifier = RecordingNotifier::new().with_unavailable(LOG_CHANNEL_ID);
    let service = AuditLogService::new(db, &notifier);

    let outcome = service.handle(&message_deleted(Some("hello"))).await;

    assert_eq!(outcome, AuditOutcome::ChannelUnavailable);

    Ok(())
}

/// Tests a database failure while reading the flag.
///
/// Verifies the error is swallowed rather than returned.
///
/// Expected: Failed with nothing sent
#[tokio::test]
async fn database_failure_is_swallowed() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let service = AuditLogService::new(db, &notifier);

    let outcome = service.handle(&message_deleted(Some("hello"))).await;

    assert_eq!(outcome, AuditOutcome::Failed);
    assert!(notifier.sent().is_empty());

    Ok(())
}
