use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub tag_name: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Writable tag fields. Missing keys deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagInput {
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub category: String,
}

impl From<&Tag> for TagInput {
    fn from(tag: &Tag) -> Self {
        Self {
            tag_name: tag.tag_name.clone(),
            category: tag.category.clone(),
        }
    }
}

/// Reference to an existing tag inside an FAQ payload, e.g. `{"id": 3}`.
/// Any other keys (a full tag object) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: i64,
}
