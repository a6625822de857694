use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemStats::Table)
                    .if_not_exists()
                    .col(string(ItemStats::UserId).primary_key())
                    .col(big_integer(ItemStats::ItemsCollected).default(0))
                    .col(big_integer(ItemStats::ItemsDestroyed).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemStats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ItemStats {
    Table,
    UserId,
    ItemsCollected,
    ItemsDestroyed,
}
