use super::*;

/// Tests storing and restoring the bot's presence.
///
/// Expected: kind parsed case-insensitively and both values restored
#[tokio::test]
async fn stores_and_restores_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customisation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CustomisationService::new(db);
    assert_eq!(service.stored_presence().await.unwrap(), None);

    let kind = service.set_presence("Watching", "the logs").await.unwrap();
    assert_eq!(kind, ActivityKind::Watching);

    assert_eq!(
        service.stored_presence().await.unwrap(),
        Some((ActivityKind::Watching, "the logs".to_string()))
    );

    Ok(())
}

/// Tests an unknown activity kind.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn rejects_unknown_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customisation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CustomisationService::new(db);
    let result = service.set_presence("streaming", "hi").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Customisation::find().count(db).await?, 0);

    Ok(())
}

/// Tests restoring a presence whose stored kind is corrupt.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_corrupt_stored_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customisation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let scope = GLOBAL_SCOPE.to_string();
    factory::create_setting(db, &scope, "activity_type", "dancing").await?;
    factory::create_setting(db, &scope, "bio", "hi").await?;

    let service = CustomisationService::new(db);

    assert_eq!(service.stored_presence().await.unwrap(), None);

    Ok(())
}

/// Tests avatar URL validation.
///
/// Expected: http(s) accepted, anything else rejected
#[test]
fn validates_avatar_urls() {
    assert!(parse_avatar_url("https://example.com/a.png").is_ok());
    assert!(parse_avatar_url(" http://example.com/a.png ").is_ok());
    assert!(matches!(
        parse_avatar_url("file:///etc/passwd"),
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        parse_avatar_url("not a url"),
        Err(AppError::BadRequest(_))
    ));
}
