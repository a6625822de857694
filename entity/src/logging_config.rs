use sea_orm::entity::prelude::*;

/// Per-guild audit log switches, one boolean column per event kind.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "logging_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub member_join: bool,
    pub member_remove: bool,
    pub message_edit: bool,
    pub message_delete: bool,
    pub voice_state_update: bool,
    pub guild_channel_create: bool,
    pub guild_channel_delete: bool,
    pub guild_channel_update: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
