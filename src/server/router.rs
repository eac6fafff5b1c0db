use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{
            get_prompt_settings, reuse_prompt_message, submit_prompt_message,
            update_presentation_mode,
        },
        prompt::get_prompt_config,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "linkprompt", description = "External link confirmation prompt API"),
    paths(
        crate::server::controller::prompt::get_prompt_config,
        crate::server::controller::admin::get_prompt_settings,
        crate::server::controller::admin::submit_prompt_message,
        crate::server::controller::admin::reuse_prompt_message,
        crate::server::controller::admin::update_presentation_mode,
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    // The configuration is read by pages that may be served from another origin.
    let public = Router::new()
        .route("/api/prompt/config", get(get_prompt_config))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        );

    let admin = Router::new()
        .route("/api/admin/prompt", get(get_prompt_settings))
        .route("/api/admin/prompt/messages", post(submit_prompt_message))
        .route(
            "/api/admin/prompt/messages/{message_id}/reuse",
            post(reuse_prompt_message),
        )
        .route(
            "/api/admin/prompt/presentation-mode",
            put(update_presentation_mode),
        );

    Router::new()
        .merge(public)
        .merge(admin)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
