use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum number of characters in a theme description.
pub const DESCRIPTION_MAX_LEN: usize = 255;

/// Theme entity - a category that posts are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDraft {
    pub description: String,
}

impl ThemeDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        super::require_text("descricao", &self.description, DESCRIPTION_MAX_LEN)
    }
}

/// A theme that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTheme {
    pub description: String,
}

impl From<ThemeDraft> for NewTheme {
    fn from(draft: ThemeDraft) -> Self {
        Self {
            description: draft.description,
        }
    }
}
