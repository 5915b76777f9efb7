use std::sync::Arc;

use sqlx::SqlitePool;

use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Gemini in production; stubbed in tests.
    pub completion: Arc<dyn CompletionClient>,
}
