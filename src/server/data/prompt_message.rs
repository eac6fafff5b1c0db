//! Prompt message data repository for database operations
//!
//! Provides the `PromptMessageRepository` for reading and mutating the message history
//! table. Ordering by id ascending is the insertion order the rest of the application
//! relies on.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::prompt_message::PromptMessage;

/// Repository providing database operations for the prompt message history.
pub struct PromptMessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PromptMessageRepository<'a, C> {
    /// Creates a new PromptMessageRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `PromptMessageRepository` - new repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every stored message, oldest first
    ///
    /// # Returns
    /// - `Ok(Vec<PromptMessage>)` - All messages ordered by id ascending
    /// - `Err(DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<PromptMessage>, DbErr> {
        let messages = entity::prelude::PromptMessage::find()
            .order_by_asc(entity::prompt_message::Column::Id)
            .all(self.db)
            .await?;

        Ok(messages.into_iter().map(PromptMessage::from_entity).collect())
    }

    /// Gets the active message, which is the one with the greatest id
    ///
    /// # Returns
    /// - `Ok(Some(PromptMessage))` - The most recently inserted message
    /// - `Ok(None)` - The history is empty
    /// - `Err(DbErr)` - Database error
    pub async fn get_latest(&self) -> Result<Option<PromptMessage>, DbErr> {
        let message = entity::prelude::PromptMessage::find()
            .order_by_desc(entity::prompt_message::Column::Id)
            .one(self.db)
            .await?;

        Ok(message.map(PromptMessage::from_entity))
    }

    /// Inserts a new message stamped with the current time
    ///
    /// # Arguments
    /// - `content` - Sanitized message content
    ///
    /// # Returns
    /// - `Ok(PromptMessage)` - The created message with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, content: String) -> Result<PromptMessage, DbErr> {
        let message = entity::prompt_message::ActiveModel {
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PromptMessage::from_entity(message))
    }

    /// Deletes the message with the provided id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the id does not exist)
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_id(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PromptMessage::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
