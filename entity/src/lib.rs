//! SeaORM entities for every table the bot persists.
//!
//! Discord snowflakes are stored as strings and parsed back to `u64` at the
//! repository boundary.

pub mod prelude;

pub mod blacklist;
pub mod customisation;
pub mod guild_config;
pub mod item_stats;
pub mod logging_config;
pub mod permission;
