pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::selection::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/submissions", post(handlers::handle_submit))
        .route("/api/v1/records", get(handlers::handle_list_records))
        .route("/api/v1/records/:id", get(handlers::handle_get_record))
        .with_state(state)
}
