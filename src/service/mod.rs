//! Service layer between the bot's event and command handlers and the repositories.
//!
//! Services own the behaviour of each feature: the audit and command usage loggers,
//! the permission gate and the command operations. Anything that posts to the chat
//! platform goes through an injected [`notifier::Notifier`].

pub mod audit;
pub mod customisation;
pub mod logging;
pub mod module;
pub mod notifier;
pub mod permission;
pub mod stats;
pub mod suggestion;
pub mod table;
pub mod usage;

#[cfg(test)]
mod test;
