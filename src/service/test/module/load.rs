use super::*;

/// Tests loading every module at startup on an empty database.
///
/// Expected: all modules loaded and every table created
#[tokio::test]
async fn load_all_creates_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ModuleRegistry::new();
    registry.load_all(db).await.unwrap();

    assert_eq!(registry.loaded().await, FeatureModule::ALL.to_vec());

    let repo = TableRepository::new(db);
    for table in ManagedTable::ALL {
        assert!(repo.exists(table).await?, "{table}");
    }

    Ok(())
}

/// Tests loading a module that is already loaded.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_loading_twice() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ModuleRegistry::new();
    registry.load(db, "utility").await.unwrap();

    let result = registry.load(db, "utility").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests loading an unknown module name.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_module() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ModuleRegistry::new();
    let result = registry.load(db, "music").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that reloading recreates a table dropped while the module was loaded.
///
/// Expected: Ok with the table present again
#[tokio::test]
async fn reload_recreates_dropped_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ModuleRegistry::new();
    registry.load(db, "logging").await.unwrap();

    let repo = TableRepository::new(db);
    repo.drop(ManagedTable::Config).await?;
    assert!(!repo.exists(ManagedTable::Config).await?);

    let module = registry.reload(db, "Logging").await.unwrap();

    assert_eq!(module, FeatureModule::Logging);
    assert!(repo.exists(ManagedTable::Config).await?);

    Ok(())
}
