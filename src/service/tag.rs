//! Tag persistence.

use crate::error::AppError;
use crate::models::{Tag, TagInput};
use crate::service::binding::bind_onto;
use chrono::Utc;
use serde_json::Value;
use sqlx::SqlitePool;

const TAG_COLUMNS: &str = "id, tag_name, category, created_at, updated_at, deleted_at";

pub struct TagService;

impl TagService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Tag>, AppError> {
        let rows: Vec<Tag> = sqlx::query_as(&format!(
            "SELECT {TAG_COLUMNS} FROM tags WHERE deleted_at IS NULL ORDER BY id"
        ))
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Tag>, AppError> {
        let row: Option<Tag> = sqlx::query_as(&format!(
            "SELECT {TAG_COLUMNS} FROM tags WHERE id = ? AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn create(pool: &SqlitePool, input: &TagInput) -> Result<Tag, AppError> {
        let now = Utc::now();
        let tag: Tag = sqlx::query_as(&format!(
            "INSERT INTO tags (tag_name, category, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING {TAG_COLUMNS}"
        ))
        .bind(&input.tag_name)
        .bind(&input.category)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;
        tracing::info!(tag_id = tag.id, tag_name = %tag.tag_name, "tag created");
        Ok(tag)
    }

    /// Bind `body` onto the stored tag and save it. Returns None when the tag does not exist.
    pub async fn update(pool: &SqlitePool, id: i64, body: Value) -> Result<Option<Tag>, AppError> {
        let Some(current) = Self::read(pool, id).await? else {
            return Ok(None);
        };
        let input: TagInput = bind_onto(&TagInput::from(&current), body)?;
        let tag: Option<Tag> = sqlx::query_as(&format!(
            "UPDATE tags SET tag_name = ?, category = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL RETURNING {TAG_COLUMNS}"
        ))
        .bind(&input.tag_name)
        .bind(&input.category)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(pool)
        .await?;
        if tag.is_some() {
            tracing::info!(tag_id = id, "tag updated");
        }
        Ok(tag)
    }

    /// Soft delete. Association rows are kept; deleted tags are filtered out when FAQs load their tags.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE tags SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
            .bind(Utc::now())
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(tag_id = id, "tag soft-deleted");
        }
        Ok(deleted)
    }
}
