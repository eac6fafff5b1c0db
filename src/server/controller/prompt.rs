use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, prompt::PromptConfigDto},
    server::{error::AppError, service::prompt_config::PromptConfigService, state::AppState},
};

/// Tag for grouping public prompt endpoints in OpenAPI documentation
pub static PROMPT_TAG: &str = "prompt";

/// Get the prompt configuration for the client.
///
/// Returns the active message, rendered for the modal and as plain text, together with
/// the labels and the presentation mode. The client loads this once per page and uses
/// it to decide how external links are confirmed. No authentication is required.
///
/// # Arguments
/// - `state` - Application state containing the database connection and prompt settings
///
/// # Returns
/// - `200 OK` - Prompt configuration
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/prompt/config",
    tag = PROMPT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved prompt configuration", body = PromptConfigDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_prompt_config(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let payload = PromptConfigService::new(&state.db, &state.prompt)
        .payload()
        .await?;

    Ok((StatusCode::OK, Json(payload)))
}
