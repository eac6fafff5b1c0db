//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds the database connection pool and the prompt
//! settings resolved from configuration; there is no other global state.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::config::PromptSettings;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the prompt
/// settings sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool holding the message history and plugin options.
    pub db: DatabaseConnection,

    /// Labels and placeholder rules used to render the client payload.
    pub prompt: Arc<PromptSettings>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `prompt` - Prompt settings loaded from configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, prompt: PromptSettings) -> Self {
        Self {
            db,
            prompt: Arc::new(prompt),
        }
    }
}
