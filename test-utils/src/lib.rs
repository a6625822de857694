//! Guildlog Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the guildlog
//! bot. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! Entity factories live in [`factory`] and Serenity model factories in [`serenity`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::LoggingConfig;
//!
//! #[tokio::test]
//! async fn test_logging_config() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(LoggingConfig)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
