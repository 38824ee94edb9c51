//! Domain entities - the core business objects.

mod post;
mod theme;

pub use post::{NewPost, Post, PostDraft, TEXT_MAX_LEN, TITLE_MAX_LEN};
pub use theme::{DESCRIPTION_MAX_LEN, NewTheme, Theme, ThemeDraft};

use crate::error::DomainError;

/// Checks that a required text field is present and within `max` characters.
pub(crate) fn require_text(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
