use migration::{Alias, SchemaManager, Table};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    Schema,
};

use crate::model::table::ManagedTable;

/// Schema-level operations over the allow-listed tables.
pub struct TableRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn exists(&self, table: ManagedTable) -> Result<bool, DbErr> {
        SchemaManager::new(self.db).has_table(table.name()).await
    }

    /// Deletes every row of the table.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(DbErr)` - Database error, including a missing table
    pub async fn clear(&self, table: ManagedTable) -> Result<u64, DbErr> {
        let result = match table {
            ManagedTable::Customisation => {
                entity::prelude::Customisation::delete_many().exec(self.db).await?
            }
            ManagedTable::LoggingConfig => {
                entity::prelude::LoggingConfig::delete_many().exec(self.db).await?
            }
            ManagedTable::Permissions => {
                entity::prelude::Permission::delete_many().exec(self.db).await?
            }
            ManagedTable::Blacklist => {
                entity::prelude::Blacklist::delete_many().exec(self.db).await?
            }
            ManagedTable::Config => {
                entity::prelude::GuildConfig::delete_many().exec(self.db).await?
            }
            ManagedTable::ItemStats => {
                entity::prelude::ItemStats::delete_many().exec(self.db).await?
            }
        };

        Ok(result.rows_affected)
    }

    /// Drops the table if it exists.
    pub async fn drop(&self, table: ManagedTable) -> Result<(), DbErr> {
        SchemaManager::new(self.db)
            .drop_table(
                Table::drop()
                    .table(Alias::new(table.name()))
                    .if_exists()
                    .to_owned(),
            )
            .await
    }

    /// Creates the table from its entity definition unless it already exists.
    pub async fn create_if_missing(&self, table: ManagedTable) -> Result<(), DbErr> {
        let schema = Schema::new(self.db.get_database_backend());
        let mut stmt = match table {
            ManagedTable::Customisation => {
                create_statement(&schema, entity::prelude::Customisation)
            }
            ManagedTable::LoggingConfig => {
                create_statement(&schema, entity::prelude::LoggingConfig)
            }
            ManagedTable::Permissions => create_statement(&schema, entity::prelude::Permission),
            ManagedTable::Blacklist => create_statement(&schema, entity::prelude::Blacklist),
            ManagedTable::Config => create_statement(&schema, entity::prelude::GuildConfig),
            ManagedTable::ItemStats => create_statement(&schema, entity::prelude::ItemStats),
        };
        stmt.if_not_exists();

        self.db.execute(&stmt).await?;

        Ok(())
    }
}

fn create_statement<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    schema.create_table_from_entity(entity)
}
