//! Resolution of the prompt configuration handed to the client.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::prompt::{PresentationMode, PromptConfigDto, PromptMessageContentDto},
    server::{
        config::PromptSettings,
        data::{plugin_option::PluginOptionRepository, prompt_message::PromptMessageRepository},
        error::AppError,
        model::prompt_config::PromptSettingsView,
        service::prompt_message::PromptMessageService,
        util::{
            html::{decode_entities, to_plain_text},
            placeholder::rewrite_placeholders,
        },
    },
};

/// Option key under which the presentation mode is persisted.
pub const CONFIRMATION_STYLE_OPTION: &str = "confirmation_style";

pub struct PromptConfigService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a PromptSettings,
}

impl<'a> PromptConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a PromptSettings) -> Self {
        Self { db, settings }
    }

    /// Gets the active message text
    ///
    /// Reads the most recent message and decodes its character references. An empty
    /// history yields an empty string.
    ///
    /// # Arguments
    /// - `strip_tags` - Remove markup and placeholder tokens and normalize spacing
    ///
    /// # Returns
    /// - `Ok(String)` - The active message
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn active_message(&self, strip_tags: bool) -> Result<String, AppError> {
        let latest = PromptMessageRepository::new(self.db).get_latest().await?;

        let decoded = latest
            .map(|message| decode_entities(&message.content))
            .unwrap_or_default();

        Ok(if strip_tags {
            to_plain_text(&decoded)
        } else {
            decoded
        })
    }

    /// Gets the persisted presentation mode, `Confirmation` when never set
    pub async fn presentation_mode(&self) -> Result<PresentationMode, AppError> {
        let value = PluginOptionRepository::new(self.db)
            .get(CONFIRMATION_STYLE_OPTION)
            .await?;

        Ok(value
            .as_deref()
            .map(PresentationMode::from_option_value)
            .unwrap_or_default())
    }

    /// Persists the presentation mode derived from the administrator's modal toggle
    pub async fn set_presentation_mode(&self, modal: bool) -> Result<PresentationMode, AppError> {
        let mode = PresentationMode::from_modal_flag(modal);

        PluginOptionRepository::new(self.db)
            .set(CONFIRMATION_STYLE_OPTION, mode.as_str())
            .await?;

        tracing::info!("Presentation mode set to {}", mode.as_str());

        Ok(mode)
    }

    /// Builds the read-only payload the client prompter is configured from
    ///
    /// `content` is the decoded message with placeholders rewritten into action markup;
    /// `plain_content` is the same message without any markup for native dialogs.
    pub async fn payload(&self) -> Result<PromptConfigDto, AppError> {
        let presentation_mode = self.presentation_mode().await?;
        let decoded = self.active_message(false).await?;
        let labels = &self.settings.labels;

        Ok(PromptConfigDto {
            message: PromptMessageContentDto {
                title: labels.title.clone(),
                content: rewrite_placeholders(&decoded, &self.settings.placeholders),
                plain_content: to_plain_text(&decoded),
                actions: labels.actions.clone(),
                close: labels.close.clone(),
                cancel: labels.cancel.clone(),
                redirect: labels.redirect.clone(),
            },
            presentation_mode,
        })
    }

    /// Gets the administrative view: presentation mode plus message history
    pub async fn settings_view(&self) -> Result<PromptSettingsView, AppError> {
        Ok(PromptSettingsView {
            presentation_mode: self.presentation_mode().await?,
            messages: PromptMessageService::new(self.db).history().await?,
        })
    }
}
