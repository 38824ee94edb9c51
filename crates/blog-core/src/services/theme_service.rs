use std::sync::Arc;

use crate::domain::{Theme, ThemeDraft};
use crate::error::{DomainError, RepoError};
use crate::ports::{PostRepository, ThemeRepository};

const THEME: &str = "Theme";

/// Theme use cases.
pub struct ThemeService {
    themes: Arc<dyn ThemeRepository>,
    posts: Arc<dyn PostRepository>,
}

impl ThemeService {
    pub fn new(themes: Arc<dyn ThemeRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { themes, posts }
    }

    pub async fn list_all(&self) -> Result<Vec<Theme>, DomainError> {
        Ok(self.themes.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Theme, DomainError> {
        self.themes
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: THEME,
                id,
            })
    }

    pub async fn search_by_description(
        &self,
        description: &str,
    ) -> Result<Vec<Theme>, DomainError> {
        Ok(self
            .themes
            .find_all_by_description_containing_ignore_case(description)
            .await?)
    }

    pub async fn create(&self, draft: ThemeDraft) -> Result<Theme, DomainError> {
        draft.validate()?;
        let theme = self.themes.insert(draft.into()).await?;
        tracing::info!(theme_id = theme.id, "Theme created");
        Ok(theme)
    }

    pub async fn update(&self, id: i64, draft: ThemeDraft) -> Result<Theme, DomainError> {
        draft.validate()?;
        if !self.themes.exists_by_id(id).await? {
            return Err(DomainError::NotFound {
                entity_type: THEME,
                id,
            });
        }

        let theme = Theme {
            id,
            description: draft.description,
        };
        self.themes.update(theme).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: THEME,
                id,
            },
            other => other.into(),
        })
    }

    /// Delete a theme that no post refers to.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.themes.exists_by_id(id).await? {
            return Err(DomainError::NotFound {
                entity_type: THEME,
                id,
            });
        }
        if self.posts.exists_by_theme_id(id).await? {
            return Err(DomainError::Conflict(format!(
                "Theme {id} still has posts filed under it"
            )));
        }

        self.themes.delete(id).await?;
        tracing::info!(theme_id = id, "Theme deleted");
        Ok(())
    }
}
