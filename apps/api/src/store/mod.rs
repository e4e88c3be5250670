//! Document storage collaborator.
//!
//! The service only needs two things from storage: write a semi-structured
//! document into a named collection, and read documents back by filter.
//! `AppState` holds an `Arc<dyn DocumentStore>`, picked at startup from config.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

pub const INTERVIEWS: &str = "interview";
pub const EVALUATIONS: &str = "evaluation";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A document as read back from storage. Field presence is not enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl StoredDocument {
    /// Flattens into a JSON object with the storage id under `id`.
    /// A caller-supplied `id` field is overwritten.
    pub fn into_json(self) -> Value {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        Value::Object(fields)
    }

    /// True when `id` is either the storage id or the document's own `id` field.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id == id || self.fields.get("id").and_then(Value::as_str) == Some(id)
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persists `document` (a JSON object) and returns the assigned id.
    async fn create_document(&self, collection: &str, document: Value)
        -> Result<String, StoreError>;

    /// Returns up to `limit` documents whose fields contain every field of
    /// `filter`, newest first. An empty filter object matches everything.
    async fn get_documents(
        &self,
        collection: &str,
        filter: &Value,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<StoredDocument>, StoreError>;

    /// Names of collections holding at least one document.
    async fn collections(&self) -> Result<Vec<String>, StoreError>;

    fn backend_name(&self) -> &'static str;
}

/// Outcome of a write whose failure must not fail the request.
#[derive(Debug, Clone, PartialEq)]
pub enum BestEffort {
    Stored(String),
    Dropped,
}

/// Writes `document`, logging and discarding any storage failure.
pub async fn persist_best_effort(
    store: &dyn DocumentStore,
    collection: &str,
    document: Value,
) -> BestEffort {
    match store.create_document(collection, document).await {
        Ok(id) => BestEffort::Stored(id),
        Err(e) => {
            warn!("Best-effort write to '{collection}' dropped: {e}");
            BestEffort::Dropped
        }
    }
}

pub(crate) fn require_object(document: Value) -> Result<Map<String, Value>, StoreError> {
    match document {
        Value::Object(fields) => Ok(fields),
        other => Err(StoreError::Unavailable(format!(
            "documents must be JSON objects, got {other}"
        ))),
    }
}

/// Test double whose every call fails.
#[cfg(test)]
pub(crate) struct FailingStore;

#[cfg(test)]
#[async_trait]
impl DocumentStore for FailingStore {
    async fn create_document(&self, _: &str, _: Value) -> Result<String, StoreError> {
        Err(StoreError::Unavailable("write refused".to_string()))
    }

    async fn get_documents(
        &self,
        _: &str,
        _: &Value,
        _: usize,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        Err(StoreError::Unavailable("read refused".to_string()))
    }

    async fn get_document(&self, _: &str, _: &str) -> Result<Option<StoredDocument>, StoreError> {
        Err(StoreError::Unavailable("read refused".to_string()))
    }

    async fn collections(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str, fields: Value) -> StoredDocument {
        StoredDocument {
            id: id.to_string(),
            fields: require_object(fields).unwrap(),
        }
    }

    #[test]
    fn test_into_json_adds_storage_id() {
        let value = doc("abc", json!({"role": "x"})).into_json();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["role"], "x");
    }

    #[test]
    fn test_into_json_overwrites_caller_id() {
        let value = doc("abc", json!({"id": "mine"})).into_json();
        assert_eq!(value["id"], "abc");
    }

    #[test]
    fn test_matches_storage_or_caller_id() {
        let d = doc("abc", json!({"id": "legacy-7"}));
        assert!(d.matches_id("abc"));
        assert!(d.matches_id("legacy-7"));
        assert!(!d.matches_id("other"));
    }

    #[test]
    fn test_require_object_rejects_arrays() {
        assert!(require_object(json!([1, 2])).is_err());
    }

    #[tokio::test]
    async fn test_best_effort_swallows_failure() {
        let outcome = persist_best_effort(&FailingStore, EVALUATIONS, json!({})).await;
        assert_eq!(outcome, BestEffort::Dropped);
    }

    #[tokio::test]
    async fn test_best_effort_returns_id_on_success() {
        let store = MemoryDocumentStore::new();
        let outcome = persist_best_effort(&store, EVALUATIONS, json!({"a": 1})).await;
        assert!(matches!(outcome, BestEffort::Stored(_)));
    }
}
