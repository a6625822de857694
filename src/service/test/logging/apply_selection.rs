use super::*;

/// Tests enabling all events and then disabling one.
///
/// Expected: confirmation messages and seven of eight flags enabled
#[tokio::test]
async fn all_then_single() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LoggingService::new(db);
    service.prepare(1).await.unwrap();

    let reply = service.apply_selection(1, &["all"], true).await.unwrap();
    assert_eq!(reply, "Enabled logging for all events.");

    let reply = service
        .apply_selection(1, &["message_edit"], false)
        .await
        .unwrap();
    assert_eq!(reply, "Disabled logging for message_edit events.");

    let config = service.settings(1).await.unwrap().unwrap();
    for (event, enabled) in config.flags() {
        assert_eq!(enabled, event != LogEvent::MessageEdit, "{event}");
    }

    Ok(())
}

/// Tests that the ALL sentinel wins over individual events.
///
/// Expected: every flag enabled
#[tokio::test]
async fn all_sentinel_wins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LoggingService::new(db);
    service
        .apply_selection(1, &["member_join", "all"], true)
        .await
        .unwrap();

    let config = service.settings(1).await.unwrap().unwrap();
    assert!(config.flags().iter().all(|(_, enabled)| *enabled));

    Ok(())
}

/// Tests a selection naming an unknown event.
///
/// Expected: Err(BadRequest) and no row written
#[tokio::test]
async fn rejects_unknown_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LoggingService::new(db);
    let result = service
        .apply_selection(1, &["member_join", "guild_update"], true)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.settings(1).await.unwrap().is_none());

    Ok(())
}
