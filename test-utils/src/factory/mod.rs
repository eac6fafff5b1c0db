//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
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
//!     let message = factory::create_prompt_message(&db).await?;
//!
//!     // Fill the history with several messages, oldest first
//!     let history = factory::helpers::create_message_history(&db, 6).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `prompt_message` - Create prompt message history entries
//! - `plugin_option` - Create plugin option entries
//! - `helpers` - Convenience methods for creating several entities at once

pub mod helpers;
pub mod plugin_option;
pub mod prompt_message;

pub use plugin_option::create_plugin_option;
pub use prompt_message::create_prompt_message;
