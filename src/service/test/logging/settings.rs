use super::*;

/// Tests reading settings before and after the menu is first opened.
///
/// Expected: None before prepare, all disabled after
#[tokio::test]
async fn prepare_creates_disabled_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LoggingService::new(db);
    assert!(service.settings(1).await.unwrap().is_none());

    service.prepare(1).await.unwrap();

    let config = service.settings(1).await.unwrap().unwrap();
    assert!(config.flags().iter().all(|(_, enabled)| !*enabled));

    Ok(())
}

/// Tests setting the log channel.
///
/// Expected: Ok with the channel stored
#[tokio::test]
async fn sets_log_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LoggingService::new(db);
    let config = service.set_log_channel(1, 500).await.unwrap();

    assert_eq!(config.log_channel_id, Some(500));

    Ok(())
}
