//! Domain models for the prompt message history.

use chrono::{DateTime, Utc};

use crate::{model::prompt::PromptMessageDto, server::util::html::decode_entities};

/// A stored confirmation message.
///
/// `content` is kept in its stored, entity-encoded form; decoding happens when the
/// message leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptMessage {
    /// Monotonically assigned identifier; the greatest id is the active message.
    pub id: i32,
    /// Sanitized, entity-encoded message content.
    pub content: String,
    /// Timestamp when the message was inserted.
    pub created_at: DateTime<Utc>,
}

impl PromptMessage {
    /// Converts an entity model to a prompt message.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::prompt_message::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    /// Content with character references decoded.
    pub fn decoded_content(&self) -> String {
        decode_entities(&self.content)
    }

    /// Converts the prompt message into a DTO with decoded content.
    pub fn into_dto(self) -> PromptMessageDto {
        PromptMessageDto {
            content: self.decoded_content(),
            id: self.id,
            created_at: self.created_at,
        }
    }
}

/// Result of submitting a new message.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The message was stored and is now active.
    Added {
        message: PromptMessage,
        /// Id of the oldest message removed to stay within the history bound.
        evicted: Option<i32>,
    },
    /// A message with the same content already exists; nothing changed.
    Duplicate,
}

/// Result of reactivating a message from the history.
#[derive(Debug, Clone, PartialEq)]
pub enum ReuseOutcome {
    /// The old entry was removed and reinserted under a new id.
    Reactivated {
        previous_id: i32,
        message: PromptMessage,
    },
    /// The requested message already is the active one.
    AlreadyActive,
    /// No message with the requested id exists.
    NotFound,
}
