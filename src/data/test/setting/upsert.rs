use super::*;

/// Tests writing then reading a setting.
///
/// Expected: Ok with the written value read back
#[tokio::test]
async fn inserts_new_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customisation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    let setting = repo
        .upsert(123456789, SettingType::EmbedColour, "ff00ff")
        .await?;

    assert_eq!(setting.guild_id, 123456789);
    assert_eq!(setting.setting_type, "embed_color");
    assert_eq!(
        repo.get(123456789, SettingType::EmbedColour).await?,
        Some("ff00ff".to_string())
    );

    Ok(())
}

/// Tests overwriting an existing setting.
///
/// Verifies that uniqueness on (guild, type) holds: the second write
/// replaces the value instead of adding a row.
///
/// Expected: Ok with a single row holding the new value
#[tokio::test]
async fn overwrites_existing_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customisation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.upsert(123456789, SettingType::EmbedColour, "ff00ff")
        .await?;
    repo.upsert(123456789, SettingType::EmbedColour, "00ffff")
        .await?;

    assert_eq!(
        repo.get(123456789, SettingType::EmbedColour).await?,
        Some("00ffff".to_string())
    );

    let count = entity::prelude::Customisation::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests writing settings inside a transaction that is rolled back.
///
/// Verifies the repository runs on a transaction as well as on the pool, so
/// related settings can be written as one unit.
///
/// Expected: Ok with no setting stored after rollback
#[tokio::test]
async fn rolled_back_writes_are_discarded() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customisation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    let repo = SettingRepository::new(&txn);
    repo.upsert(0, SettingType::ActivityType, "playing").await?;
    repo.upsert(0, SettingType::Bio, "with fire").await?;
    txn.rollback().await?;

    let repo = SettingRepository::new(db);
    assert_eq!(repo.get(0, SettingType::ActivityType).await?, None);
    assert_eq!(repo.get(0, SettingType::Bio).await?, None);

    Ok(())
}
