use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        prompt::{PromptSettingsDto, SubmitPromptMessageDto, UpdatePresentationModeDto},
    },
    server::{
        error::AppError,
        model::prompt_message::{ReuseOutcome, SubmitOutcome},
        service::{prompt_config::PromptConfigService, prompt_message::PromptMessageService},
        state::AppState,
    },
};

/// Tag for grouping prompt administration endpoints in OpenAPI documentation
pub static ADMIN_PROMPT_TAG: &str = "admin_prompt";

/// Get the prompt settings.
///
/// Returns the presentation mode and the full message history, oldest first, with the
/// id of the active message.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Current prompt settings
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/prompt",
    tag = ADMIN_PROMPT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved prompt settings", body = PromptSettingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_prompt_settings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let view = PromptConfigService::new(&state.db, &state.prompt)
        .settings_view()
        .await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Submit a new prompt message.
///
/// Sanitizes the content and stores it as the active message. Content identical to a
/// message already in the history is ignored. When the history grows beyond its bound
/// the oldest message is dropped.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Message content as typed by the administrator
///
/// # Returns
/// - `200 OK` - Prompt settings after the submission
/// - `400 Bad Request` - Content is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/prompt/messages",
    tag = ADMIN_PROMPT_TAG,
    request_body = SubmitPromptMessageDto,
    responses(
        (status = 200, description = "Prompt settings after the submission", body = PromptSettingsDto),
        (status = 400, description = "Message content is empty", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_prompt_message(
    State(state): State<AppState>,
    Json(payload): Json<SubmitPromptMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = PromptMessageService::new(&state.db)
        .submit(&payload.content)
        .await?;

    if outcome == SubmitOutcome::Duplicate {
        tracing::debug!("Submitted prompt message already exists in history");
    }

    let view = PromptConfigService::new(&state.db, &state.prompt)
        .settings_view()
        .await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Reactivate a message from the history.
///
/// The message is moved to the end of the history under a new id. Reactivating the
/// active message or an unknown id leaves the history unchanged.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `message_id` - Id of the history entry to reactivate
///
/// # Returns
/// - `200 OK` - Prompt settings after the reactivation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/prompt/messages/{message_id}/reuse",
    tag = ADMIN_PROMPT_TAG,
    params(
        ("message_id" = i32, Path, description = "Prompt message ID")
    ),
    responses(
        (status = 200, description = "Prompt settings after the reactivation", body = PromptSettingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reuse_prompt_message(
    State(state): State<AppState>,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = PromptMessageService::new(&state.db)
        .reuse(message_id)
        .await?;

    if let ReuseOutcome::Reactivated { message, .. } = outcome {
        tracing::debug!("Prompt message {} is now active", message.id);
    }

    let view = PromptConfigService::new(&state.db, &state.prompt)
        .settings_view()
        .await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Update the presentation mode.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Whether the custom modal should be used instead of the native dialog
///
/// # Returns
/// - `200 OK` - Prompt settings with the new presentation mode
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/prompt/presentation-mode",
    tag = ADMIN_PROMPT_TAG,
    request_body = UpdatePresentationModeDto,
    responses(
        (status = 200, description = "Prompt settings with the new presentation mode", body = PromptSettingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_presentation_mode(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePresentationModeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PromptConfigService::new(&state.db, &state.prompt);

    service.set_presentation_mode(payload.modal).await?;
    let view = service.settings_view().await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}
