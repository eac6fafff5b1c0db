use dioxus_logger::tracing;

use crate::{
    client::prompter::modal::{ModalController, ModalSurface, ModalTemplate},
    model::prompt::{PresentationMode, PromptConfigDto},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDecision {
    /// Let the browser follow the link.
    Proceed,
    /// Prevent the default navigation.
    Cancel,
}

/// The element a click landed on.
///
/// This may be an anchor or any element nested inside one.
pub trait ClickTarget {
    /// Raw `href` attribute of the element itself.
    fn href_attribute(&self) -> Option<String>;

    /// `href` attribute of the nearest enclosing anchor.
    fn enclosing_anchor_href(&self) -> Option<String>;

    fn resolve_url(&self) -> Option<String> {
        self.href_attribute()
            .or_else(|| self.enclosing_anchor_href())
    }
}

/// Browser facilities the dispatcher needs.
pub trait PromptHost {
    /// Shows a blocking yes/no dialog and returns whether the visitor accepted.
    fn confirm(&mut self, message: &str) -> bool;

    fn navigate(&mut self, url: &str);
}

/// Reacts to clicks on external links according to the presentation mode.
pub struct PromptDispatcher<S> {
    mode: PresentationMode,
    plain_message: String,
    modal: ModalController<S>,
}

impl<S: ModalSurface> PromptDispatcher<S> {
    /// Creates the dispatcher from the server payload.
    ///
    /// In modal mode the modal is built immediately; otherwise it is never built.
    pub fn new(config: &PromptConfigDto, surface: S) -> Result<Self, String> {
        let template = ModalTemplate::from_payload(&config.message);

        let modal = match config.presentation_mode {
            PresentationMode::Modal => ModalController::eager(surface, template)?,
            PresentationMode::Confirmation => ModalController::new(surface, template),
        };

        Ok(Self {
            mode: config.presentation_mode,
            plain_message: config.message.plain_content.clone(),
            modal,
        })
    }

    pub fn handle_click(
        &mut self,
        target: &impl ClickTarget,
        host: &mut impl PromptHost,
    ) -> ClickDecision {
        match self.mode {
            PresentationMode::Confirmation => {
                if host.confirm(&self.plain_message) {
                    ClickDecision::Proceed
                } else {
                    ClickDecision::Cancel
                }
            }
            PresentationMode::Modal => {
                if let Err(e) = self.modal.ensure_built().and_then(|_| self.modal.show()) {
                    tracing::error!("Failed to open prompt modal: {}", e);
                }

                match target.resolve_url() {
                    Some(url) => self.modal.arm(url),
                    None => {
                        tracing::warn!("Clicked link has no resolvable address");
                        self.modal.disarm();
                    }
                }

                ClickDecision::Cancel
            }
        }
    }

    /// Follows the most recently clicked link. Returns whether a link was armed.
    pub fn confirm_modal(&mut self, host: &mut impl PromptHost) -> bool {
        match self.modal.confirm() {
            Some(url) => {
                host.navigate(&url);
                true
            }
            None => false,
        }
    }

    /// Closes the modal without navigating.
    pub fn dismiss_modal(&mut self) {
        if let Err(e) = self.modal.hide() {
            tracing::error!("Failed to close prompt modal: {}", e);
        }
    }

    pub fn modal(&self) -> &ModalController<S> {
        &self.modal
    }
}
