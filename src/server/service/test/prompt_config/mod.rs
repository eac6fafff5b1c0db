use crate::{
    model::prompt::PresentationMode,
    server::{
        config::PromptSettings,
        error::AppError,
        service::{
            prompt_config::{PromptConfigService, CONFIRMATION_STYLE_OPTION},
            prompt_message::PromptMessageService,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod active_message;
mod payload;
mod presentation_mode;
