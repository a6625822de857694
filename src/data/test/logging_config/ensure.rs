use super::*;

/// Tests creating the default row for an unconfigured guild.
///
/// Expected: Ok with a row where every flag is false
#[tokio::test]
async fn creates_disabled_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoggingConfigRepository::new(db);
    let config = repo.ensure(123456789).await?;

    assert_eq!(config.guild_id, 123456789);
    assert!(config.flags().iter().all(|(_, enabled)| !*enabled));
    assert!(repo.get(123456789).await?.is_some());

    Ok(())
}

/// Tests ensuring a row that already exists.
///
/// Verifies that existing flags are not reset.
///
/// Expected: Ok with stored flags unchanged
#[tokio::test]
async fn preserves_existing_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoggingConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::logging_config::LoggingConfigFactory::new(db)
        .guild_id("123456789")
        .all(true)
        .build()
        .await?;

    let repo = LoggingConfigRepository::new(db);
    let config = repo.ensure(123456789).await?;

    assert!(config.flags().iter().all(|(_, enabled)| *enabled));

    Ok(())
}
