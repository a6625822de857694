use super::*;

/// Tests authorising then unauthorising a user.
///
/// Verifies the second call updates the existing row instead of inserting.
///
/// Expected: Ok with a single row whose flag is false
#[tokio::test]
async fn authorise_then_revoke() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Permission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PermissionRepository::new(db);

    let granted = repo.set(1, 2, true).await?;
    assert!(granted.can_use_commands);

    let revoked = repo.set(1, 2, false).await?;
    assert!(!revoked.can_use_commands);
    assert_eq!(revoked.guild_id, 1);
    assert_eq!(revoked.user_id, 2);

    let count = entity::prelude::Permission::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
