//! Guild Tracker Test Utils
//!
//! Provides shared testing utilities for building repository and service tests for the
//! guild tracker API. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for every entity in the schema.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn credits_points() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let guild = factory::create_guild(db).await?;
//!     let user = factory::create_user(db, guild.guild_id).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
