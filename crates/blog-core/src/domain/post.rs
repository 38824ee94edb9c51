use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum number of characters in a post title.
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum number of characters in a post body.
pub const TEXT_MAX_LEN: usize = 1000;

/// Post entity - a blog post filed under exactly one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub theme_id: i64,
}

/// Client-supplied post fields, before any identity or timestamp is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub text: String,
    pub theme_id: i64,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>, theme_id: i64) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            theme_id,
        }
    }

    /// Check required fields and length limits.
    pub fn validate(&self) -> Result<(), DomainError> {
        super::require_text("titulo", &self.title, TITLE_MAX_LEN)?;
        super::require_text("texto", &self.text, TEXT_MAX_LEN)?;
        Ok(())
    }
}

/// A post that has not been stored yet; storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub theme_id: i64,
}

impl NewPost {
    /// Stamp a validated draft with the current time.
    pub fn from_draft(draft: PostDraft) -> Self {
        Self {
            title: draft.title,
            text: draft.text,
            created_at: Utc::now(),
            theme_id: draft.theme_id,
        }
    }
}

impl Post {
    /// Replace every client-owned field, keeping id and creation time.
    pub fn replace_with(self, draft: PostDraft) -> Self {
        Self {
            id: self.id,
            title: draft.title,
            text: draft.text,
            created_at: self.created_at,
            theme_id: draft.theme_id,
        }
    }
}
