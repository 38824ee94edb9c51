use std::sync::Arc;

use crate::domain::{NewPost, Post, PostDraft};
use crate::error::{DomainError, RepoError};
use crate::ports::{PostRepository, ThemeRepository};

const POST: &str = "Post";
const THEME: &str = "Theme";

/// Post use cases.
///
/// Both storage collaborators are handed in by the caller; the service keeps
/// no state of its own.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    themes: Arc<dyn ThemeRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, themes: Arc<dyn ThemeRepository>) -> Self {
        Self { posts, themes }
    }

    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: POST,
                id,
            })
    }

    /// Case-insensitive substring search over titles.
    pub async fn search_by_title(&self, title: &str) -> Result<Vec<Post>, DomainError> {
        Ok(self
            .posts
            .find_all_by_title_containing_ignore_case(title)
            .await?)
    }

    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        draft.validate()?;
        self.ensure_theme_exists(draft.theme_id).await?;

        let post = self.posts.insert(NewPost::from_draft(draft)).await?;
        tracing::info!(post_id = post.id, theme_id = post.theme_id, "Post created");
        Ok(post)
    }

    /// Replace the post `id` with `draft`. The creation timestamp is kept.
    pub async fn update(&self, id: i64, draft: PostDraft) -> Result<Post, DomainError> {
        draft.validate()?;
        let existing = self.get_by_id(id).await?;
        self.ensure_theme_exists(draft.theme_id).await?;

        let post = self
            .posts
            .update(existing.replace_with(draft))
            .await
            .map_err(|e| match e {
                RepoError::NotFound => DomainError::NotFound {
                    entity_type: POST,
                    id,
                },
                other => other.into(),
            })?;
        tracing::info!(post_id = post.id, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.posts.exists_by_id(id).await? {
            return Err(DomainError::NotFound {
                entity_type: POST,
                id,
            });
        }

        self.posts.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: POST,
                id,
            },
            other => other.into(),
        })?;
        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }

    async fn ensure_theme_exists(&self, theme_id: i64) -> Result<(), DomainError> {
        if self.themes.exists_by_id(theme_id).await? {
            Ok(())
        } else {
            tracing::debug!(theme_id, "Rejecting post for unknown theme");
            Err(DomainError::InvalidReference {
                entity_type: THEME,
                id: theme_id,
            })
        }
    }
}
