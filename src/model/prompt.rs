use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Class carried by the inline cancel action rewritten from the cancel placeholder.
pub const MODAL_CLOSE_TEXT_CLASS: &str = "modal-close-text";

/// Class carried by the inline redirect action rewritten from the redirect placeholder.
pub const MODAL_REDIRECT_TEXT_CLASS: &str = "modal-redirect-text";

/// How a visitor is asked to confirm leaving the site.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    /// Blocking browser-native confirmation dialog.
    #[default]
    Confirmation,
    /// Custom dismissible overlay rendered into the page.
    Modal,
}

impl PresentationMode {
    /// Value persisted in the plugin option table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmation => "confirmation",
            Self::Modal => "modal",
        }
    }

    /// Parses a persisted option value, falling back to `Confirmation` for anything unknown.
    pub fn from_option_value(value: &str) -> Self {
        match value {
            "modal" => Self::Modal,
            _ => Self::Confirmation,
        }
    }

    /// Maps the administrator's "use modal" toggle onto a mode.
    pub fn from_modal_flag(modal: bool) -> Self {
        if modal {
            Self::Modal
        } else {
            Self::Confirmation
        }
    }
}

/// Message text and labels handed to the client prompter.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PromptMessageContentDto {
    pub title: String,
    /// Entity-decoded message with placeholders rewritten into action markup.
    pub content: String,
    /// Message with markup and placeholder tokens removed, for native dialogs.
    pub plain_content: String,
    pub actions: String,
    pub close: String,
    pub cancel: String,
    pub redirect: String,
}

/// Read-only configuration payload loaded by the client at page load.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PromptConfigDto {
    pub message: PromptMessageContentDto,
    pub presentation_mode: PresentationMode,
}

/// One entry of the message history as shown to administrators.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PromptMessageDto {
    pub id: i32,
    pub content: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

/// Administrative view of the prompt settings.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PromptSettingsDto {
    pub presentation_mode: PresentationMode,
    /// Id of the active (most recent) message, if any message exists.
    pub active_message_id: Option<i32>,
    /// Message history, oldest first.
    pub messages: Vec<PromptMessageDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SubmitPromptMessageDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdatePresentationModeDto {
    pub modal: bool,
}
