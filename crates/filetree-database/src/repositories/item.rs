//! Item repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use filetree_core::error::{AppError, ErrorKind};
use filetree_core::result::AppResult;
use filetree_entity::item::{CreateItem, Item, ItemType};

use crate::store::ItemStore;

/// Repository for item CRUD and tree queries on PostgreSQL.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `SELECT` over `source` (a relation aliased `s`) adding the live child
/// count for folder rows.
fn select_with_count(source: &str) -> String {
    format!(
        "SELECT s.*, \
           CASE WHEN s.type = 'folder' THEN \
             (SELECT COUNT(*) FROM items c WHERE c.parent_id = s.id AND NOT c.is_trashed) \
           END AS items_count \
         FROM {source}"
    )
}

/// Wrap a data-modifying statement ending in `RETURNING *` so the
/// returned row carries `items_count` like every read does.
fn returning_with_count(statement: &str) -> String {
    format!(
        "WITH changed AS ({statement}) {}",
        select_with_count("changed s")
    )
}

/// Escape `LIKE` metacharacters so user input only ever matches literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    for ch in query.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Map a write error, turning unique-index violations into `Conflict`.
fn map_write_error(e: sqlx::Error, action: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::conflict(format!(
                "{action}: a sibling with this name already exists"
            ))
        }
        _ => AppError::with_source(ErrorKind::Database, action.to_string(), e),
    }
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        let sql = format!("{} WHERE s.id = $1", select_with_count("items s"));
        sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }

    async fn name_taken(
        &self,
        parent_id: Uuid,
        item_type: ItemType,
        name: &str,
        exclude: Option<Uuid>,
    ) -> AppResult<bool> {
        let found: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM items \
             WHERE parent_id = $1 AND type = $2 AND NOT is_trashed AND name = $3 \
               AND ($4::uuid IS NULL OR id <> $4) \
             LIMIT 1",
        )
        .bind(parent_id)
        .bind(item_type)
        .bind(name)
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check sibling name", e))?;

        Ok(found.is_some())
    }

    async fn list_children(&self, parent_id: Uuid, include_trashed: bool) -> AppResult<Vec<Item>> {
        let sql = format!(
            "{} WHERE s.parent_id = $1 AND ($2 OR NOT s.is_trashed) ORDER BY s.name ASC",
            select_with_count("items s")
        );
        sqlx::query_as::<_, Item>(&sql)
            .bind(parent_id)
            .bind(include_trashed)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    async fn list_trashed(&self) -> AppResult<Vec<Item>> {
        let sql = format!(
            "{} WHERE s.is_trashed ORDER BY s.deleted_at DESC NULLS LAST",
            select_with_count("items s")
        );
        sqlx::query_as::<_, Item>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list trashed items", e)
            })
    }

    async fn search(&self, query: &str, parent_id: Option<Uuid>) -> AppResult<Vec<Item>> {
        let sql = format!(
            "{} WHERE NOT s.is_trashed AND s.name ILIKE $1 \
               AND ($2::uuid IS NULL OR s.parent_id = $2)",
            select_with_count("items s")
        );
        sqlx::query_as::<_, Item>(&sql)
            .bind(format!("%{}%", escape_like(query)))
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search items", e))
    }

    async fn insert(&self, data: &CreateItem) -> AppResult<Item> {
        let sql = returning_with_count(
            "INSERT INTO items (name, type, parent_id, size_bytes) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        );
        sqlx::query_as::<_, Item>(&sql)
            .bind(&data.name)
            .bind(data.item_type)
            .bind(data.parent_id)
            .bind(data.size_bytes)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to create item"))
    }

    async fn rename(&self, id: Uuid, name: &str) -> AppResult<Option<Item>> {
        let sql = returning_with_count(
            "UPDATE items SET name = $2, modified_at = NOW() WHERE id = $1 RETURNING *",
        );
        sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to rename item"))
    }

    async fn trash(&self, id: Uuid) -> AppResult<Option<Item>> {
        let sql = returning_with_count(
            "UPDATE items \
             SET is_trashed = TRUE, \
                 original_parent_id = COALESCE(original_parent_id, parent_id), \
                 deleted_at = NOW() \
             WHERE id = $1 RETURNING *",
        );
        sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to trash item", e))
    }

    async fn restore(&self, id: Uuid, parent_id: Uuid, name: &str) -> AppResult<Option<Item>> {
        let sql = returning_with_count(
            "UPDATE items \
             SET is_trashed = FALSE, \
                 parent_id = $2, \
                 name = $3, \
                 original_parent_id = NULL, \
                 deleted_at = NULL, \
                 modified_at = NOW() \
             WHERE id = $1 RETURNING *",
        );
        sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .bind(parent_id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to restore item"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
