//! Domain models and user-input parsing.
//!
//! Repositories convert SeaORM entities into these types so services never handle
//! stringly-typed ids directly.

pub mod audit;
pub mod guild_config;
pub mod logging;
pub mod module;
pub mod permission;
pub mod setting;
pub mod stats;
pub mod table;
pub mod usage;
