//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Member) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_user};
//!
//! #[test]
//! fn test_capability_gate() {
//!     let staff = create_test_member(123456789, 987654321, &[111111111]);
//!     let user = create_test_user(123456789, "pilot");
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects with roles

pub mod member;
pub mod user;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use user::create_test_user;
