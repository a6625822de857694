use super::*;

/// Tests a guild administrator with no grant row.
///
/// Expected: Ok(true)
#[tokio::test]
async fn administrator_without_grant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Permission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PermissionService::new(db, OWNER_ID);

    assert!(service.can_use_admin_commands(&invoker(5, true)).await.unwrap());

    Ok(())
}

/// Tests a non-administrator with and without an enabled grant.
///
/// Expected: Ok(true) with the grant, Ok(false) without
#[tokio::test]
async fn follows_grants_for_non_administrators() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Permission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_permission(db, &GUILD_ID.to_string(), "5", true).await?;
    factory::create_permission(db, &GUILD_ID.to_string(), "6", false).await?;

    let service = PermissionService::new(db, OWNER_ID);

    assert!(service.can_use_admin_commands(&invoker(5, false)).await.unwrap());
    assert!(!service.can_use_admin_commands(&invoker(6, false)).await.unwrap());
    assert!(!service.can_use_admin_commands(&invoker(7, false)).await.unwrap());

    Ok(())
}

/// Tests the owner without administrator permission or grant.
///
/// Expected: Ok(true)
#[tokio::test]
async fn owner_is_always_allowed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Permission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PermissionService::new(db, OWNER_ID);

    assert!(service.is_owner(OWNER_ID));
    assert!(!service.is_owner(OWNER_ID + 1));
    assert!(service
        .can_use_admin_commands(&invoker(OWNER_ID, false))
        .await
        .unwrap());

    Ok(())
}

/// Tests that revoking a grant removes access.
///
/// Expected: Ok(false) after set_authorised(false)
#[tokio::test]
async fn revoked_grant_denies_access() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Permission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PermissionService::new(db, OWNER_ID);

    service.set_authorised(GUILD_ID, 5, true).await.unwrap();
    assert!(service.can_use_admin_commands(&invoker(5, false)).await.unwrap());

    service.set_authorised(GUILD_ID, 5, false).await.unwrap();
    assert!(!service.can_use_admin_commands(&invoker(5, false)).await.unwrap());

    Ok(())
}
