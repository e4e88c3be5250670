pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/health/storage", get(health::storage_health_handler))
        // Interview API
        .route(
            "/api/interviews",
            get(handlers::handle_list_interviews).post(handlers::handle_create_interview),
        )
        .route("/api/evaluate", post(handlers::handle_evaluate))
        .with_state(state)
}
