//! FAQ persistence: CRUD with soft delete and batch-loaded tags.

use crate::error::AppError;
use crate::models::{Faq, FaqInput, FaqRow, FaqTagRow, Tag, TagRef};
use crate::service::binding::bind_onto;
use chrono::Utc;
use serde_json::Value;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::collections::{BTreeSet, HashMap};

const FAQ_COLUMNS: &str = "id, question, answer, created_at, updated_at, deleted_at";

/// Ids bound per tag lookup; SQLite rejects statements with too many parameters.
const TAG_LOOKUP_BATCH: usize = 500;

pub struct FaqService;

impl FaqService {
    /// All non-deleted FAQs in id order, tags loaded.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Faq>, AppError> {
        let sql = format!("SELECT {FAQ_COLUMNS} FROM faqs WHERE deleted_at IS NULL ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<FaqRow> = sqlx::query_as(&sql).fetch_all(pool).await?;
        Self::attach_tags(pool, rows).await
    }

    /// Non-deleted FAQs linked to a non-deleted tag named `tag_name`.
    pub async fn list_by_tag(pool: &SqlitePool, tag_name: &str) -> Result<Vec<Faq>, AppError> {
        let sql = "SELECT DISTINCT f.id, f.question, f.answer, f.created_at, f.updated_at, f.deleted_at \
                   FROM faqs f \
                   JOIN faq_tags ft ON ft.faq_id = f.id \
                   JOIN tags t ON t.id = ft.tag_id \
                   WHERE f.deleted_at IS NULL AND t.deleted_at IS NULL AND t.tag_name = ? \
                   ORDER BY f.id";
        tracing::debug!(sql = %sql, tag_name = %tag_name, "query");
        let rows: Vec<FaqRow> = sqlx::query_as(sql).bind(tag_name).fetch_all(pool).await?;
        Self::attach_tags(pool, rows).await
    }

    /// Fetch one non-deleted FAQ with tags. Returns None when missing or soft-deleted.
    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Faq>, AppError> {
        let Some(row) = Self::find_row(pool, id).await? else {
            return Ok(None);
        };
        Ok(Self::attach_tags(pool, vec![row]).await?.pop())
    }

    /// Insert the FAQ and its tag associations in one transaction.
    pub async fn create(pool: &SqlitePool, input: &FaqInput) -> Result<Faq, AppError> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;
        let row: FaqRow = sqlx::query_as(&format!(
            "INSERT INTO faqs (question, answer, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING {FAQ_COLUMNS}"
        ))
        .bind(&input.question)
        .bind(&input.answer)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;
        if let Some(tags) = &input.tags {
            Self::replace_tags(&mut tx, row.id, tags).await?;
        }
        tx.commit().await?;
        tracing::info!(faq_id = row.id, "faq created");
        Self::attach_tags(pool, vec![row])
            .await?
            .pop()
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Bind `body` onto the stored FAQ and save it. Returns None when the FAQ does not exist.
    pub async fn update(pool: &SqlitePool, id: i64, body: Value) -> Result<Option<Faq>, AppError> {
        let Some(current) = Self::find_row(pool, id).await? else {
            return Ok(None);
        };
        let input: FaqInput = bind_onto(&FaqInput::from(&current), body)?;

        let mut tx = pool.begin().await?;
        let updated: Option<FaqRow> = sqlx::query_as(&format!(
            "UPDATE faqs SET question = ?, answer = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL RETURNING {FAQ_COLUMNS}"
        ))
        .bind(&input.question)
        .bind(&input.answer)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(updated) = updated else {
            return Ok(None);
        };
        if let Some(tags) = &input.tags {
            Self::replace_tags(&mut tx, id, tags).await?;
        }
        tx.commit().await?;
        tracing::info!(faq_id = id, "faq updated");
        Ok(Self::attach_tags(pool, vec![updated]).await?.pop())
    }

    /// Soft delete. Returns false when there was no live FAQ with this id.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE faqs SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
            .bind(Utc::now())
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(faq_id = id, "faq soft-deleted");
        }
        Ok(deleted)
    }

    async fn find_row(pool: &SqlitePool, id: i64) -> Result<Option<FaqRow>, AppError> {
        let row: Option<FaqRow> = sqlx::query_as(&format!(
            "SELECT {FAQ_COLUMNS} FROM faqs WHERE id = ? AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Replace the association set of `faq_id`. Every referenced tag must exist and not be deleted.
    async fn replace_tags(conn: &mut SqliteConnection, faq_id: i64, refs: &[TagRef]) -> Result<(), AppError> {
        let tag_ids: BTreeSet<i64> = refs.iter().map(|r| r.id).collect();
        for tag_id in &tag_ids {
            let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM tags WHERE id = ? AND deleted_at IS NULL")
                .bind(*tag_id)
                .fetch_optional(&mut *conn)
                .await?;
            if found.is_none() {
                tracing::debug!(faq_id, tag_id = *tag_id, "unknown tag reference");
                return Err(AppError::invalid_payload());
            }
        }
        sqlx::query("DELETE FROM faq_tags WHERE faq_id = ?")
            .bind(faq_id)
            .execute(&mut *conn)
            .await?;
        for tag_id in tag_ids {
            sqlx::query("INSERT OR IGNORE INTO faq_tags (faq_id, tag_id) VALUES (?, ?)")
                .bind(faq_id)
                .bind(tag_id)
                .execute(&mut *conn)
                .await?;
        }
        Ok(())
    }

    /// Load the live tags of all `rows` in batched IN queries and attach them in memory.
    async fn attach_tags(pool: &SqlitePool, rows: Vec<FaqRow>) -> Result<Vec<Faq>, AppError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let mut links: Vec<FaqTagRow> = Vec::new();
        for batch in rows.chunks(TAG_LOOKUP_BATCH) {
            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
                "SELECT ft.faq_id, t.id, t.tag_name, t.category, t.created_at, t.updated_at, t.deleted_at \
                 FROM faq_tags ft JOIN tags t ON t.id = ft.tag_id \
                 WHERE t.deleted_at IS NULL AND ft.faq_id IN (",
            );
            let mut ids = qb.separated(", ");
            for row in batch {
                ids.push_bind(row.id);
            }
            ids.push_unseparated(") ORDER BY ft.faq_id, t.id");
            tracing::debug!(sql = %qb.sql(), faqs = batch.len(), "load tags");
            links.extend(qb.build_query_as::<FaqTagRow>().fetch_all(pool).await?);
        }

        let mut by_faq: HashMap<i64, Vec<Tag>> = HashMap::new();
        for link in links {
            by_faq.entry(link.faq_id).or_default().push(link.tag);
        }
        Ok(rows
            .into_iter()
            .map(|row| {
                let tags = by_faq.remove(&row.id).unwrap_or_default();
                row.with_tags(tags)
            })
            .collect())
    }
}
