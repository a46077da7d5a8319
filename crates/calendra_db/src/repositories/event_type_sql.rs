//! SQL implementation of the event type repository
//!
//! The full event type is stored as JSON in `payload`; `id`, `slug` and
//! `title` are mirrored into columns for lookups and uniqueness.

use crate::error::DbError;
use crate::DbClient;
use calendra_common::models::EventType;
use calendra_common::services::{BoxFuture, BoxedError, EventTypeRepository};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SqlEventTypeRepository {
    db_client: DbClient,
}

impl SqlEventTypeRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    /// Creates the `event_types` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing event type schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS event_types (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                slug TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL,
                payload TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#;
        self.db_client.execute(query).await?;

        info!("Event type schema initialized successfully");
        Ok(())
    }

    fn decode(row: &AnyRow) -> Result<EventType, DbError> {
        let id: i64 = row.try_get("id")?;
        let payload: String = row.try_get("payload")?;
        let mut event_type: EventType = serde_json::from_str(&payload)?;
        event_type.id = id;
        Ok(event_type)
    }

    async fn list_rows(&self) -> Result<Vec<EventType>, DbError> {
        let rows = sqlx::query("SELECT id, payload FROM event_types ORDER BY id")
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        rows.iter().map(Self::decode).collect()
    }

    async fn find_one(&self, column: &str, value: FindKey) -> Result<Option<EventType>, DbError> {
        let sql = format!("SELECT id, payload FROM event_types WHERE {} = $1", column);
        let query = sqlx::query(&sql);
        let query = match value {
            FindKey::Id(id) => query.bind(id),
            FindKey::Slug(slug) => query.bind(slug),
        };
        let row = query
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        row.as_ref().map(Self::decode).transpose()
    }

    async fn insert(&self, mut event_type: EventType) -> Result<EventType, DbError> {
        debug!("Inserting event type with slug: {}", event_type.slug);
        let mut tx = self.db_client.begin().await?;

        let id: i64 = if event_type.id > 0 {
            sqlx::query("INSERT INTO event_types (id, slug, title, payload) VALUES ($1, $2, $3, '{}')")
                .bind(event_type.id)
                .bind(event_type.slug.clone())
                .bind(event_type.title.clone())
                .execute(&mut *tx)
                .await
                .map_err(|e| insert_error(e, &event_type.slug))?;
            event_type.id
        } else {
            let row = sqlx::query(
                "INSERT INTO event_types (slug, title, payload) VALUES ($1, $2, '{}') RETURNING id",
            )
            .bind(event_type.slug.clone())
            .bind(event_type.title.clone())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| insert_error(e, &event_type.slug))?;
            row.try_get("id")?
        };

        event_type.id = id;
        let payload = serde_json::to_string(&event_type)?;
        sqlx::query("UPDATE event_types SET payload = $1 WHERE id = $2")
            .bind(payload)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;
        info!("Event type {} created", id);
        Ok(event_type)
    }

    async fn replace(&self, event_type: EventType) -> Result<Option<EventType>, DbError> {
        let payload = serde_json::to_string(&event_type)?;
        let result = sqlx::query(
            "UPDATE event_types SET slug = $1, title = $2, payload = $3, updated_at = CURRENT_TIMESTAMP WHERE id = $4",
        )
        .bind(event_type.slug.clone())
        .bind(event_type.title.clone())
        .bind(payload)
        .bind(event_type.id)
        .execute(self.db_client.pool())
        .await
        .map_err(|e| DbError::QueryError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(event_type))
    }

    async fn remove(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM event_types WHERE id = $1")
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Maps a violation of the unique slug column to [`DbError::DuplicateSlug`].
fn insert_error(err: sqlx::Error, slug: &str) -> DbError {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() && db_err.message().contains("slug") => {
            DbError::DuplicateSlug(slug.to_string())
        }
        _ => DbError::QueryError(err.to_string()),
    }
}

enum FindKey {
    Id(i64),
    Slug(String),
}

impl EventTypeRepository for SqlEventTypeRepository {
    fn list(&self) -> BoxFuture<'_, Vec<EventType>, BoxedError> {
        Box::pin(async move { Ok(self.list_rows().await?) })
    }

    fn find_by_id(&self, id: i64) -> BoxFuture<'_, Option<EventType>, BoxedError> {
        Box::pin(async move { Ok(self.find_one("id", FindKey::Id(id)).await?) })
    }

    fn find_by_slug(&self, slug: &str) -> BoxFuture<'_, Option<EventType>, BoxedError> {
        let slug = slug.to_string();
        Box::pin(async move { Ok(self.find_one("slug", FindKey::Slug(slug)).await?) })
    }

    fn create(&self, event_type: EventType) -> BoxFuture<'_, EventType, BoxedError> {
        Box::pin(async move { Ok(self.insert(event_type).await?) })
    }

    fn update(&self, event_type: EventType) -> BoxFuture<'_, Option<EventType>, BoxedError> {
        Box::pin(async move { Ok(self.replace(event_type).await?) })
    }

    fn delete(&self, id: i64) -> BoxFuture<'_, bool, BoxedError> {
        Box::pin(async move { Ok(self.remove(id).await?) })
    }
}
