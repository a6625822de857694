pub use super::blacklist::Entity as Blacklist;
pub use super::customisation::Entity as Customisation;
pub use super::guild_config::Entity as GuildConfig;
pub use super::item_stats::Entity as ItemStats;
pub use super::logging_config::Entity as LoggingConfig;
pub use super::permission::Entity as Permission;
