//! Database repository layer.
//!
//! Repositories wrap SeaORM entities and return domain models from `crate::model`.
//! Every write that may race with another handler is a single
//! `INSERT ... ON CONFLICT DO UPDATE` statement.

pub mod blacklist;
pub mod guild_config;
pub mod item_stats;
pub mod logging_config;
pub mod permission;
pub mod setting;
pub mod table;

pub use blacklist::BlacklistRepository;
pub use guild_config::GuildConfigRepository;
pub use item_stats::ItemStatsRepository;
pub use logging_config::LoggingConfigRepository;
pub use permission::PermissionRepository;
pub use setting::SettingRepository;
pub use table::TableRepository;
