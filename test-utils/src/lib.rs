//! Clubboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the clubboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting members, notices and research papers with defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_members() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_club_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let member = factory::member::create_member(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
