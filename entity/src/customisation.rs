use sea_orm::entity::prelude::*;

/// Generic per-guild key/value setting, unique on `(guild_id, type)`.
///
/// Bot-wide settings such as the presence text use guild id `"0"`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customisation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "type")]
    pub setting_type: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
