use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use super::{require_object, DocumentStore, StoreError, StoredDocument};

/// Documents live in one JSONB table keyed by collection.
pub struct PgDocumentStore {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Value,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

impl TryFrom<DocumentRow> for StoredDocument {
    type Error = StoreError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        Ok(StoredDocument {
            id: row.id.to_string(),
            fields: require_object(row.body)?,
        })
    }
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, StoreError> {
        let body = Value::Object(require_object(document)?);
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(&body)
            .execute(&self.pool)
            .await?;

        debug!("Inserted document {id} into '{collection}'");
        Ok(id.to_string())
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &Value,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body, created_at
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq DESC
            LIMIT $3
            "#,
        )
        .bind(collection)
        .bind(filter)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(StoredDocument::try_from).collect()
    }

    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<StoredDocument>, StoreError> {
        // Ids assigned here are always UUIDs; anything else cannot match.
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body, created_at FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(StoredDocument::try_from).transpose()
    }

    async fn collections(&self) -> Result<Vec<String>, StoreError> {
        Ok(
            sqlx::query_scalar("SELECT DISTINCT collection FROM documents ORDER BY collection")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
