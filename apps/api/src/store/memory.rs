use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{require_object, DocumentStore, StoreError, StoredDocument};

/// In-process document store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_all(fields: &serde_json::Map<String, Value>, filter: &Value) -> bool {
    match filter {
        Value::Object(wanted) => wanted.iter().all(|(k, v)| fields.get(k) == Some(v)),
        _ => false,
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, StoreError> {
        let fields = require_object(document)?;
        let id = Uuid::new_v4().to_string();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                fields,
            });
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &Value,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let guard = self.collections.read().await;
        let Some(docs) = guard.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .rev()
            .filter(|d| contains_all(&d.fields, filter))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<StoredDocument>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn collections(&self) -> Result<Vec<String>, StoreError> {
        let guard = self.collections.read().await;
        let mut names: Vec<String> = guard
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
