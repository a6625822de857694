use super::*;

/// Tests deleting a table, then deleting it again.
///
/// Expected: Ok the first time, Err(NotFound) once it is gone
#[tokio::test]
async fn drops_table_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TableService::new(db);

    assert_eq!(
        service.delete("item_stats").await.unwrap(),
        ManagedTable::ItemStats
    );
    assert!(!TableRepository::new(db).exists(ManagedTable::ItemStats).await?);

    assert!(matches!(
        service.delete("item_stats").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.reset("item_stats").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
