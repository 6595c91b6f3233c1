use crate::models::tag::{Tag, TagRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An FAQ as returned by the API, with its tags loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Row of the `faqs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FaqRow {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl FaqRow {
    pub fn with_tags(self, tags: Vec<Tag>) -> Faq {
        Faq {
            id: self.id,
            question: self.question,
            answer: self.answer,
            tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// Writable FAQ fields. `tags: None` leaves associations untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqInput {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagRef>>,
}

impl From<&FaqRow> for FaqInput {
    fn from(row: &FaqRow) -> Self {
        Self {
            question: row.question.clone(),
            answer: row.answer.clone(),
            tags: None,
        }
    }
}

/// Join row: one tag attached to `faq_id`.
#[derive(Debug, sqlx::FromRow)]
pub struct FaqTagRow {
    pub faq_id: i64,
    #[sqlx(flatten)]
    pub tag: Tag,
}
