pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_customisation_table;
mod m20261018_000002_create_logging_config_table;
mod m20261018_000003_create_permissions_table;
mod m20261018_000004_create_blacklist_table;
mod m20261018_000005_create_config_table;
mod m20261018_000006_create_item_stats_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_customisation_table::Migration),
            Box::new(m20261018_000002_create_logging_config_table::Migration),
            Box::new(m20261018_000003_create_permissions_table::Migration),
            Box::new(m20261018_000004_create_blacklist_table::Migration),
            Box::new(m20261018_000005_create_config_table::Migration),
            Box::new(m20261018_000006_create_item_stats_table::Migration),
        ]
    }
}
