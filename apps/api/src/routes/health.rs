use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Collection names reported by the storage diagnostic.
const MAX_LISTED_COLLECTIONS: usize = 10;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "AI Interviewer Backend running" }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "interviewer-api"
    }))
}

/// GET /health/storage
/// Reports storage connectivity. Always 200; failures are described in the body.
pub async fn storage_health_handler(State(state): State<AppState>) -> Json<Value> {
    let backend = state.store.backend_name();
    match state.store.collections().await {
        Ok(mut collections) => {
            collections.truncate(MAX_LISTED_COLLECTIONS);
            Json(json!({
                "backend": "running",
                "storage": backend,
                "connection_status": "Connected",
                "collections": collections
            }))
        }
        Err(e) => {
            tracing::warn!("Storage health check failed: {e}");
            Json(json!({
                "backend": "running",
                "storage": backend,
                "connection_status": "Error",
                "collections": [],
                "error": e.to_string()
            }))
        }
    }
}
