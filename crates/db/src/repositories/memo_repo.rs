//! Repository for the `memos` table.

use chrono::Utc;
use memo_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::memo::{CreateMemo, Memo, UpdateMemo};

/// Column list for memos queries.
const COLUMNS: &str = "id, title, content, created_at, updated_at";

/// Provides CRUD operations for memos.
pub struct MemoRepo;

impl MemoRepo {
    /// List all memos, ordered by id ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Memo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM memos ORDER BY id ASC");
        sqlx::query_as::<_, Memo>(&query).fetch_all(pool).await
    }

    /// Find a memo by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Memo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM memos WHERE id = ?1");
        sqlx::query_as::<_, Memo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new memo, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateMemo) -> Result<Memo, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO memos (title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Memo>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update, returning the updated row.
    ///
    /// Fields that are `None` in `input` keep their stored value.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMemo,
    ) -> Result<Option<Memo>, sqlx::Error> {
        let query = format!(
            "UPDATE memos SET
                title = COALESCE(?2, title),
                content = COALESCE(?3, content),
                updated_at = ?4
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Memo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a memo by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM memos WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
