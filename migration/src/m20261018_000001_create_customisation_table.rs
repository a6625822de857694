use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customisation::Table)
                    .if_not_exists()
                    .col(string(Customisation::GuildId))
                    .col(string(Customisation::Type))
                    .col(string(Customisation::Value))
                    .primary_key(
                        Index::create()
                            .name("pk_customisation")
                            .col(Customisation::GuildId)
                            .col(Customisation::Type),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customisation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customisation {
    Table,
    GuildId,
    Type,
    Value,
}
