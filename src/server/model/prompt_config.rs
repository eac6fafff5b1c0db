//! Domain model for the administrative prompt settings view.

use crate::{
    model::prompt::{PresentationMode, PromptSettingsDto},
    server::model::prompt_message::PromptMessage,
};

/// Current presentation mode together with the full message history.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSettingsView {
    pub presentation_mode: PresentationMode,
    /// Message history ordered by id, oldest first.
    pub messages: Vec<PromptMessage>,
}

impl PromptSettingsView {
    /// The active message is always the last entry of the history.
    pub fn active_message(&self) -> Option<&PromptMessage> {
        self.messages.last()
    }

    pub fn into_dto(self) -> PromptSettingsDto {
        PromptSettingsDto {
            presentation_mode: self.presentation_mode,
            active_message_id: self.active_message().map(|message| message.id),
            messages: self
                .messages
                .into_iter()
                .map(PromptMessage::into_dto)
                .collect(),
        }
    }
}
