//! Destructive table administration.
//!
//! Only names from the [`ManagedTable`] allow-list are accepted.

use sea_orm::DatabaseConnection;

use crate::data::TableRepository;
use crate::error::AppError;
use crate::model::table::ManagedTable;

pub struct TableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Removes every row of a table, keeping its schema.
    ///
    /// # Returns
    /// - `Ok(ManagedTable)` - The table that was reset
    /// - `Err(AppError::NotFound)` - Unknown name, or the table does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn reset(&self, name: &str) -> Result<ManagedTable, AppError> {
        let table = self.existing(name).await?;

        let removed = TableRepository::new(self.db).clear(table).await?;
        tracing::info!("Reset table {} ({} rows removed)", table, removed);

        Ok(table)
    }

    /// Drops a table. Loading its module again recreates it.
    ///
    /// # Returns
    /// - `Ok(ManagedTable)` - The table that was dropped
    /// - `Err(AppError::NotFound)` - Unknown name, or the table does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, name: &str) -> Result<ManagedTable, AppError> {
        let table = self.existing(name).await?;

        TableRepository::new(self.db).drop(table).await?;
        tracing::info!("Deleted table {}", table);

        Ok(table)
    }

    async fn existing(&self, name: &str) -> Result<ManagedTable, AppError> {
        let not_found =
            || AppError::NotFound(format!("`Error: No table found with name {}`", name));

        let table = ManagedTable::from_name(name).ok_or_else(not_found)?;
        if !TableRepository::new(self.db).exists(table).await? {
            return Err(not_found());
        }

        Ok(table)
    }
}
