use std::sync::Arc;

use crate::interview::bank::QuestionBank;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Storage collaborator. Postgres when DATABASE_URL is set, in-memory otherwise.
    pub store: Arc<dyn DocumentStore>,
    /// Read-only after startup.
    pub bank: Arc<QuestionBank>,
}
