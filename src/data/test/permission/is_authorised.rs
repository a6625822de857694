use super::*;

/// Tests a user with no grant row.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Permission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PermissionRepository::new(db);

    assert!(!repo.is_authorised(1, 2).await?);

    Ok(())
}

/// Tests grants with true and false flags.
///
/// Expected: Ok(true) for the enabled grant, Ok(false) for the revoked one
#[tokio::test]
async fn follows_stored_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Permission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_permission(db, "1", "2", true).await?;
    factory::create_permission(db, "1", "3", false).await?;

    let repo = PermissionRepository::new(db);

    assert!(repo.is_authorised(1, 2).await?);
    assert!(!repo.is_authorised(1, 3).await?);

    Ok(())
}

/// Tests that grants do not carry over to other guilds.
///
/// Expected: Ok(false) in a different guild
#[tokio::test]
async fn scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Permission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_permission(db, "1", "2", true).await?;

    let repo = PermissionRepository::new(db);

    assert!(!repo.is_authorised(9, 2).await?);

    Ok(())
}
