//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let config = factory::create_logging_config(&db).await?;
//!
//!     // Customize through the builder
//!     let config = factory::logging_config::LoggingConfigFactory::new(&db)
//!         .guild_id("123")
//!         .all(true)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `logging_config` - Per-guild audit log switches
//! - `customisation` - Generic guild settings
//! - `permission` - Authorised user grants
//! - `guild_config` - Log destination channel
//! - `blacklist` - Suggestion blacklist entries
//! - `item_stats` - Per-user item counters
//! - `helpers` - Shared ID generation

pub mod blacklist;
pub mod customisation;
pub mod guild_config;
pub mod helpers;
pub mod item_stats;
pub mod logging_config;
pub mod permission;

pub use blacklist::create_blacklist_entry;
pub use customisation::create_setting;
pub use guild_config::create_guild_config;
pub use item_stats::create_item_stats;
pub use logging_config::create_logging_config;
pub use permission::create_permission;
