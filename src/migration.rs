//! Create the `faqs`, `tags` and `faq_tags` tables. Idempotent; run at every startup.

use crate::error::AppError;
use sqlx::SqlitePool;

const TABLES: &[(&str, &str)] = &[
    (
        "faqs",
        r#"
        CREATE TABLE IF NOT EXISTS faqs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL DEFAULT '',
            answer TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        )
        "#,
    ),
    (
        "tags",
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tag_name TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        )
        "#,
    ),
    (
        "faq_tags",
        r#"
        CREATE TABLE IF NOT EXISTS faq_tags (
            faq_id INTEGER NOT NULL REFERENCES faqs (id),
            tag_id INTEGER NOT NULL REFERENCES tags (id),
            PRIMARY KEY (faq_id, tag_id)
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_faqs_deleted_at ON faqs (deleted_at)",
    "CREATE INDEX IF NOT EXISTS idx_tags_deleted_at ON tags (deleted_at)",
    "CREATE INDEX IF NOT EXISTS idx_tags_tag_name ON tags (tag_name)",
    "CREATE INDEX IF NOT EXISTS idx_faq_tags_tag_id ON faq_tags (tag_id)",
];

pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
