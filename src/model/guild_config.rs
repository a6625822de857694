use crate::util::parse::parse_stored_id;

/// Where a guild wants its audit and command usage logs delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfig {
    pub guild_id: u64,
    pub log_channel_id: Option<u64>,
}

impl GuildConfig {
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, sea_orm::DbErr> {
        Ok(Self {
            guild_id: parse_stored_id(&entity.guild_id)?,
            log_channel_id: entity
                .log_channel_id
                .as_deref()
                .map(parse_stored_id)
                .transpose()?,
        })
    }
}
