//! Discord gateway integration.
//!
//! The bot is the only surface of the application: gateway events are converted into
//! domain events for the audit logger, and slash commands plus their message
//! components are dispatched to the service layer.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Channel create, update and delete events
//! - `GUILD_MEMBERS` - Member join and leave events (privileged intent)
//! - `GUILD_MESSAGES` - Message edit and delete events
//! - `MESSAGE_CONTENT` - Message text for edit and delete reports (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice channel joins, leaves and moves
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
