use crate::{client::model::error::ApiError, model::prompt::PromptConfigDto};

use super::helper::{get, parse_response, send_request};

/// Get the prompt configuration the link prompter is installed with
pub async fn get_prompt_config() -> Result<PromptConfigDto, ApiError> {
    let response = send_request(get("/api/prompt/config")).await?;
    parse_response(response).await
}
