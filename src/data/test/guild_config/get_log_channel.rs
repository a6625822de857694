use super::*;

/// Tests a guild without a config row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn none_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert_eq!(repo.get_log_channel(1).await?, None);

    Ok(())
}

/// Tests a config row whose channel is unset.
///
/// Expected: Ok(None)
#[tokio::test]
async fn none_when_channel_unset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("1")
        .log_channel_id(None)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);

    assert_eq!(repo.get_log_channel(1).await?, None);

    Ok(())
}

/// Tests a stored channel id that is not a number.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn errors_on_malformed_channel_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("1")
        .log_channel_id(Some("not-a-channel".to_string()))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);

    assert!(matches!(
        repo.get_log_channel(1).await,
        Err(DbErr::Custom(_))
    ));

    Ok(())
}
