use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoggingConfig::Table)
                    .if_not_exists()
                    .col(string(LoggingConfig::GuildId).primary_key())
                    .col(boolean(LoggingConfig::MemberJoin).default(false))
                    .col(boolean(LoggingConfig::MemberRemove).default(false))
                    .col(boolean(LoggingConfig::MessageEdit).default(false))
                    .col(boolean(LoggingConfig::MessageDelete).default(false))
                    .col(boolean(LoggingConfig::VoiceStateUpdate).default(false))
                    .col(boolean(LoggingConfig::GuildChannelCreate).default(false))
                    .col(boolean(LoggingConfig::GuildChannelDelete).default(false))
                    .col(boolean(LoggingConfig::GuildChannelUpdate).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoggingConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LoggingConfig {
    Table,
    GuildId,
    MemberJoin,
    MemberRemove,
    MessageEdit,
    MessageDelete,
    VoiceStateUpdate,
    GuildChannelCreate,
    GuildChannelDelete,
    GuildChannelUpdate,
}
