use crate::server::{
    error::{config::ConfigError, AppError},
    util::placeholder::PlaceholderRule,
};

const DEFAULT_TITLE: &str = "Redirect notice";
const DEFAULT_ACTIONS_LABEL: &str = "Actions";
const DEFAULT_CLOSE_LABEL: &str = "Close";
const DEFAULT_CANCEL_LABEL: &str = "Cancel";
const DEFAULT_REDIRECT_LABEL: &str = "Continue";

const DEFAULT_REDIRECT_TOKEN: &str = "[redirect]";
const DEFAULT_CANCEL_TOKEN: &str = "[cancel]";

/// Element and classes the redirect placeholder is rewritten into.
pub const REDIRECT_PSEUDO_MARKUP: &str = "a.modal-redirect.modal-redirect-text";
/// Element and classes the cancel placeholder is rewritten into.
pub const CANCEL_PSEUDO_MARKUP: &str = "a.modal-close.modal-close-text";

pub struct Config {
    pub database_url: String,

    pub prompt: PromptSettings,
}

/// Labels shown around the configurable message in the client prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptLabels {
    pub title: String,
    pub actions: String,
    pub close: String,
    pub cancel: String,
    pub redirect: String,
}

impl Default for PromptLabels {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            actions: DEFAULT_ACTIONS_LABEL.to_string(),
            close: DEFAULT_CLOSE_LABEL.to_string(),
            cancel: DEFAULT_CANCEL_LABEL.to_string(),
            redirect: DEFAULT_REDIRECT_LABEL.to_string(),
        }
    }
}

/// Prompt presentation settings resolved once at startup.
///
/// Constructed from the environment and handed by reference to the services that render
/// the client payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSettings {
    pub labels: PromptLabels,
    /// Placeholder tokens rewritten into inline action markup, applied in order.
    pub placeholders: Vec<PlaceholderRule>,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            labels: PromptLabels::default(),
            placeholders: vec![
                PlaceholderRule::new(REDIRECT_PSEUDO_MARKUP, DEFAULT_REDIRECT_TOKEN),
                PlaceholderRule::new(CANCEL_PSEUDO_MARKUP, DEFAULT_CANCEL_TOKEN),
            ],
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = PromptLabels::default();

        let labels = PromptLabels {
            title: env_or("PROMPT_TITLE", defaults.title),
            actions: env_or("PROMPT_ACTIONS_LABEL", defaults.actions),
            close: env_or("PROMPT_CLOSE_LABEL", defaults.close),
            cancel: env_or("PROMPT_CANCEL_LABEL", defaults.cancel),
            redirect: env_or("PROMPT_REDIRECT_LABEL", defaults.redirect),
        };

        let redirect_token = placeholder_token("PROMPT_REDIRECT_TOKEN", DEFAULT_REDIRECT_TOKEN)?;
        let cancel_token = placeholder_token("PROMPT_CANCEL_TOKEN", DEFAULT_CANCEL_TOKEN)?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            prompt: PromptSettings {
                labels,
                placeholders: vec![
                    PlaceholderRule::new(REDIRECT_PSEUDO_MARKUP, redirect_token),
                    PlaceholderRule::new(CANCEL_PSEUDO_MARKUP, cancel_token),
                ],
            },
        })
    }
}

fn env_or(name: &str, default: String) -> String {
    std::env::var(name).unwrap_or(default)
}

/// Reads a placeholder token from the environment, which must look like `[token]`.
fn placeholder_token(name: &str, default: &str) -> Result<String, ConfigError> {
    let value = env_or(name, default.to_string());

    let inner = value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or_default();
    if inner.is_empty() || inner.contains(['[', ']', '/']) {
        return Err(ConfigError::InvalidPlaceholderToken {
            name: name.to_string(),
            value,
        });
    }

    Ok(value)
}
