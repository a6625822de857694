use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::data::TableRepository;
use crate::error::AppError;
use crate::model::module::FeatureModule;

/// Runtime registry of loaded feature modules.
///
/// Commands of an unloaded module are rejected and, while `logging` is unloaded, the
/// audit logger ignores guild events. Loading a module (re)creates its tables, so a
/// table dropped with `delete_table` comes back on the next load. Clones share state.
#[derive(Clone)]
pub struct ModuleRegistry {
    loaded: Arc<RwLock<HashSet<FeatureModule>>>,
}

impl ModuleRegistry {
    /// Creates a registry with no modules loaded.
    pub fn new() -> Self {
        Self {
            loaded: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn is_loaded(&self, module: FeatureModule) -> bool {
        self.loaded.read().await.contains(&module)
    }

    /// Loaded modules in declaration order.
    pub async fn loaded(&self) -> Vec<FeatureModule> {
        let loaded = self.loaded.read().await;
        FeatureModule::ALL
            .into_iter()
            .filter(|module| loaded.contains(module))
            .collect()
    }

    /// Loads every module, creating any missing tables. Used at startup.
    pub async fn load_all(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        for module in FeatureModule::ALL {
            ensure_tables(db, module).await?;
            self.loaded.write().await.insert(module);
        }

        tracing::info!("Loaded modules: {:?}", self.loaded().await);

        Ok(())
    }

    /// Loads a module by name.
    ///
    /// # Returns
    /// - `Ok(FeatureModule)` - The module that was loaded
    /// - `Err(AppError::NotFound)` - No module with that name
    /// - `Err(AppError::BadRequest)` - Module already loaded
    /// - `Err(AppError::DbErr)` - Creating the module's tables failed
    pub async fn load(
        &self,
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<FeatureModule, AppError> {
        let module = resolve(name)?;

        if self.is_loaded(module).await {
            return Err(AppError::BadRequest(format!(
                "`Error: Failed to load {}. Module is already loaded`",
                module
            )));
        }

        ensure_tables(db, module).await?;
        self.loaded.write().await.insert(module);
        tracing::info!("Loaded module {}", module);

        Ok(module)
    }

    /// Unloads a module by name.
    ///
    /// # Returns
    /// - `Ok(FeatureModule)` - The module that was unloaded
    /// - `Err(AppError::NotFound)` - No module with that name
    /// - `Err(AppError::BadRequest)` - Module not loaded
    pub async fn unload(&self, name: &str) -> Result<FeatureModule, AppError> {
        let module = resolve(name)?;

        if !self.loaded.write().await.remove(&module) {
            return Err(AppError::BadRequest(format!(
                "`Error: Failed to unload {}. Module is not loaded`",
                module
            )));
        }
        tracing::info!("Unloaded module {}", module);

        Ok(module)
    }

    /// Unloads then loads a module, recreating any missing tables.
    pub async fn reload(
        &self,
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<FeatureModule, AppError> {
        let module = resolve(name)?;

        if !self.is_loaded(module).await {
            return Err(AppError::BadRequest(format!(
                "`Error: Failed to reload {}. Module is not loaded`",
                module
            )));
        }

        ensure_tables(db, module).await?;
        tracing::info!("Reloaded module {}", module);

        Ok(module)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(name: &str) -> Result<FeatureModule, AppError> {
    FeatureModule::from_name(name)
        .ok_or_else(|| AppError::NotFound(format!("`Error: No module found with name {}`", name)))
}

async fn ensure_tables(db: &DatabaseConnection, module: FeatureModule) -> Result<(), AppError> {
    let repo = TableRepository::new(db);
    for table in module.tables() {
        repo.create_if_missing(table).await?;
    }

    Ok(())
}
