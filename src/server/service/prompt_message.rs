//! Bounded prompt message history.
//!
//! `MessageStore` is a per-request view over the history table that caches the loaded
//! history until the next mutation. `PromptMessageService` builds the administrative
//! operations on top of it and runs each of them in its own transaction, so the
//! add-then-evict and delete-then-reinsert sequences are atomic.

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::prompt_message::PromptMessageRepository,
    error::AppError,
    model::prompt_message::{PromptMessage, ReuseOutcome, SubmitOutcome},
    util::html::sanitize_message,
};

/// Maximum number of messages kept in the history.
pub const MESSAGES_THRESHOLD: usize = 6;

/// Request-scoped access to the message history with a load cache.
pub struct MessageStore<'a, C: ConnectionTrait> {
    db: &'a C,
    threshold: usize,
    cache: Option<Vec<PromptMessage>>,
}

impl<'a, C: ConnectionTrait> MessageStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self::with_threshold(db, MESSAGES_THRESHOLD)
    }

    pub fn with_threshold(db: &'a C, threshold: usize) -> Self {
        Self {
            db,
            threshold,
            cache: None,
        }
    }

    /// Loads the history ordered oldest first.
    ///
    /// Only the first call after construction or after a mutation queries the database.
    pub async fn load_all(&mut self) -> Result<&[PromptMessage], DbErr> {
        if self.cache.is_none() {
            let messages = PromptMessageRepository::new(self.db).get_all().await?;
            self.cache = Some(messages);
        }

        Ok(self.cache.as_deref().unwrap_or_default())
    }

    /// The active message: the last entry of the loaded history.
    pub async fn latest(&mut self) -> Result<Option<&PromptMessage>, DbErr> {
        Ok(self.load_all().await?.last())
    }

    /// Looks up a message by id within the loaded history.
    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<&PromptMessage>, DbErr> {
        Ok(self.load_all().await?.iter().find(|message| message.id == id))
    }

    /// Whether any stored message has exactly this (stored form of) content.
    pub async fn contains_content(&mut self, content: &str) -> Result<bool, DbErr> {
        Ok(self
            .load_all()
            .await?
            .iter()
            .any(|message| message.content == content))
    }

    pub async fn count(&mut self) -> Result<usize, DbErr> {
        Ok(self.load_all().await?.len())
    }

    /// Inserts a message. Callers check for duplicates first.
    pub async fn add(&mut self, content: String) -> Result<PromptMessage, DbErr> {
        self.cache = None;
        PromptMessageRepository::new(self.db).create(content).await
    }

    /// Removes a message, returning the number of deleted rows.
    pub async fn remove_by_id(&mut self, id: i32) -> Result<u64, DbErr> {
        self.cache = None;
        PromptMessageRepository::new(self.db).delete_by_id(id).await
    }

    /// Removes the message with the smallest id once the history exceeds the threshold.
    ///
    /// Eviction is keyed on id order, not on `created_at`. At most one message is
    /// removed per call.
    pub async fn evict_oldest_if_over_threshold(&mut self) -> Result<Option<i32>, DbErr> {
        let threshold = self.threshold;
        let messages = self.load_all().await?;
        if messages.len() <= threshold {
            return Ok(None);
        }

        let Some(oldest) = messages.iter().map(|message| message.id).min() else {
            return Ok(None);
        };

        self.remove_by_id(oldest).await?;

        Ok(Some(oldest))
    }
}

pub struct PromptMessageService<'a> {
    db: &'a DatabaseConnection,
    threshold: usize,
}

impl<'a> PromptMessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            threshold: MESSAGES_THRESHOLD,
        }
    }

    /// Gets the full message history, oldest first
    pub async fn history(&self) -> Result<Vec<PromptMessage>, AppError> {
        let mut store = MessageStore::with_threshold(self.db, self.threshold);

        Ok(store.load_all().await?.to_vec())
    }

    /// Stores a new message and makes it the active one
    ///
    /// The raw input is sanitized first. Content equal to any stored message is ignored
    /// rather than rejected. When the history grows beyond the threshold the oldest
    /// message is evicted.
    ///
    /// # Arguments
    /// - `raw_content` - Message text as submitted by the administrator
    ///
    /// # Returns
    /// - `Ok(SubmitOutcome::Added)` - Message stored, with the evicted id if any
    /// - `Ok(SubmitOutcome::Duplicate)` - Nothing changed
    /// - `Err(AppError::BadRequest)` - Content is empty after sanitizing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn submit(&self, raw_content: &str) -> Result<SubmitOutcome, AppError> {
        let content = sanitize_message(raw_content);
        if content.is_empty() {
            return Err(AppError::BadRequest(
                "Message content must not be empty".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let mut store = MessageStore::with_threshold(&txn, self.threshold);

        if store.contains_content(&content).await? {
            txn.rollback().await?;
            tracing::debug!("Ignoring prompt message identical to a stored one");
            return Ok(SubmitOutcome::Duplicate);
        }

        let message = store.add(content).await?;
        let evicted = store.evict_oldest_if_over_threshold().await?;

        txn.commit().await?;

        tracing::info!("Stored prompt message {}", message.id);
        if let Some(evicted_id) = evicted {
            tracing::info!("Evicted prompt message {} from history", evicted_id);
        }

        Ok(SubmitOutcome::Added { message, evicted })
    }

    /// Makes an older message active again
    ///
    /// The message is deleted and its content inserted anew, so the reactivated message
    /// always receives a new id. Reactivating the active message or an unknown id
    /// changes nothing.
    ///
    /// # Arguments
    /// - `id` - Id of the history entry to reactivate
    ///
    /// # Returns
    /// - `Ok(ReuseOutcome)` - What happened to the history
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn reuse(&self, id: i32) -> Result<ReuseOutcome, AppError> {
        let txn = self.db.begin().await?;
        let mut store = MessageStore::with_threshold(&txn, self.threshold);

        let Some(requested) = store.find_by_id(id).await?.cloned() else {
            txn.rollback().await?;
            tracing::debug!("Ignoring reuse of unknown prompt message {}", id);
            return Ok(ReuseOutcome::NotFound);
        };

        if store.latest().await?.map(|latest| latest.id) == Some(requested.id) {
            txn.rollback().await?;
            tracing::debug!("Prompt message {} is already active", id);
            return Ok(ReuseOutcome::AlreadyActive);
        }

        store.remove_by_id(requested.id).await?;
        let message = store.add(requested.content).await?;

        txn.commit().await?;

        tracing::info!(
            "Reactivated prompt message {} as {}",
            requested.id,
            message.id
        );

        Ok(ReuseOutcome::Reactivated {
            previous_id: requested.id,
            message,
        })
    }
}

#[cfg(test)]
impl<'a> PromptMessageService<'a> {
    pub fn with_threshold(db: &'a DatabaseConnection, threshold: usize) -> Self {
        Self { db, threshold }
    }
}
