//! Sessionboard Test Utils
//!
//! Provides shared testing utilities for the sessionboard bot. This crate offers a builder
//! for creating test contexts backed by a temporary data directory, optionally pre-seeded
//! with a store document, plus JSON fixtures and Serenity factories.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring the seeded store document
//! - **TestContext**: Test environment owning the temporary data directory
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: JSON values for session votes, suggestions and whole documents
//! - **serenity**: Factories for Serenity `User` and `Member` structs
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn test_vote_toggle() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_session_vote(fixture::session_vote::json())
//!         .build()
//!         .await?;
//!
//!     let store = JsonStore::open(test.data_dir()).await?;
//!     // Perform store operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
