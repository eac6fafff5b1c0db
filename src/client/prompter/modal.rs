//! The custom confirmation overlay used in modal presentation mode.

use crate::model::prompt::{
    PromptMessageContentDto, MODAL_CLOSE_TEXT_CLASS, MODAL_REDIRECT_TEXT_CLASS,
};

/// Id of the modal root element.
pub const MODAL_ID: &str = "conf-modal-window";
/// Class of the modal root element.
pub const MODAL_CLASS: &str = "modal-window";
/// Class toggled on the root while the modal is visible.
pub const MODAL_OPENED_CLASS: &str = "modal-opened";
/// Selector of every element that closes the modal.
pub const MODAL_CLOSE_SELECTOR: &str = "a.modal-close";
/// Selector of every element that follows the armed link.
pub const MODAL_REDIRECT_SELECTOR: &str = ".modal-redirect";

/// Markup of the modal, rendered once from the client payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalTemplate {
    pub title: String,
    /// Message markup, including any inline action anchors.
    pub body: String,
    pub actions: String,
    pub close: String,
    pub cancel: String,
    pub redirect: String,
    /// Inline cancel and redirect actions exist, so the bottom action row is hidden.
    pub secondary_hidden: bool,
}

impl ModalTemplate {
    pub fn from_payload(message: &PromptMessageContentDto) -> Self {
        let body = message.content.replace("\\&quot;", "").replace("\\\"", "");

        let secondary_hidden = message.content.contains(MODAL_CLOSE_TEXT_CLASS)
            && message.content.contains(MODAL_REDIRECT_TEXT_CLASS);

        Self {
            title: message.title.clone(),
            body,
            actions: message.actions.clone(),
            close: message.close.clone(),
            cancel: message.cancel.clone(),
            redirect: message.redirect.clone(),
            secondary_hidden,
        }
    }

    /// Inner markup of the modal root.
    ///
    /// Labels are escaped, the body is inserted as markup.
    pub fn to_html(&self) -> String {
        let bot = if self.secondary_hidden {
            "modal-bot bot-hidden"
        } else {
            "modal-bot"
        };
        let close = escape(&self.close);

        format!(
            "<div>\
             <a title=\"{close}\" class=\"modal-close modal-close-top\">{close}</a>\
             <h1>{title}</h1>\
             <div class=\"msg\">{body}</div>\
             <div class=\"{bot}\"><small>{actions}</small></div>\
             <a class=\"btn button modal-close modal-close-bot {bot}\">{cancel}</a>\
             <a class=\"btn button modal-redirect modal-redirect-bot {bot}\">{redirect}</a>\
             </div>",
            close = close,
            title = escape(&self.title),
            body = self.body,
            bot = bot,
            actions = escape(&self.actions),
            cancel = escape(&self.cancel),
            redirect = escape(&self.redirect),
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Where the modal is rendered.
pub trait ModalSurface {
    /// Renders the template. Called at most once per controller.
    fn mount(&mut self, template: &ModalTemplate) -> Result<(), String>;

    fn set_open(&mut self, open: bool) -> Result<(), String>;
}

/// Lazily built modal with a re-armable redirect target.
#[derive(Debug)]
pub struct ModalController<S> {
    surface: S,
    template: ModalTemplate,
    built: bool,
    open: bool,
    armed: Option<String>,
}

impl<S: ModalSurface> ModalController<S> {
    /// Creates a controller that builds the modal on first use.
    pub fn new(surface: S, template: ModalTemplate) -> Self {
        Self {
            surface,
            template,
            built: false,
            open: false,
            armed: None,
        }
    }

    /// Creates a controller and builds the modal right away.
    pub fn eager(surface: S, template: ModalTemplate) -> Result<Self, String> {
        let mut controller = Self::new(surface, template);
        controller.ensure_built()?;

        Ok(controller)
    }

    pub fn ensure_built(&mut self) -> Result<(), String> {
        if !self.built {
            self.surface.mount(&self.template)?;
            self.built = true;
        }

        Ok(())
    }

    pub fn show(&mut self) -> Result<(), String> {
        if !self.open {
            self.surface.set_open(true)?;
            self.open = true;
        }

        Ok(())
    }

    pub fn hide(&mut self) -> Result<(), String> {
        if self.open {
            self.surface.set_open(false)?;
            self.open = false;
        }

        Ok(())
    }

    /// Sets the address the redirect action leads to, replacing any earlier one.
    pub fn arm(&mut self, url: String) {
        self.armed = Some(url);
    }

    /// Clears the redirect target.
    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// The address the redirect action currently leads to.
    pub fn confirm(&self) -> Option<String> {
        self.armed.clone()
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
