//! Prompt message factory for creating test message history entries.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test prompt messages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::prompt_message::PromptMessageFactory;
///
/// let message = PromptMessageFactory::new(&db)
///     .content("Leaving so soon? [redirect]Go[/redirect]")
///     .build()
///     .await?;
/// ```
pub struct PromptMessageFactory<'a> {
    db: &'a DatabaseConnection,
    content: String,
    created_at: DateTime<Utc>,
}

impl<'a> PromptMessageFactory<'a> {
    /// Creates a new PromptMessageFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Prompt message {id}"` where id is auto-incremented
    /// - created_at: current time
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PromptMessageFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            content: format!("Prompt message {}", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the message content.
    ///
    /// # Arguments
    /// - `content` - Stored (already sanitized) message content
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the creation timestamp.
    ///
    /// # Arguments
    /// - `created_at` - Timestamp to store
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the prompt message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::prompt_message::Model)` - Created prompt message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::prompt_message::Model, DbErr> {
        entity::prompt_message::ActiveModel {
            id: ActiveValue::NotSet,
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a prompt message with default values.
///
/// Shorthand for `PromptMessageFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::prompt_message::Model)` - Created prompt message entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_prompt_message(
    db: &DatabaseConnection,
) -> Result<entity::prompt_message::Model, DbErr> {
    PromptMessageFactory::new(db).build().await
}
