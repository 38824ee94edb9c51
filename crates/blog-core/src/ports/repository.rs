use async_trait::async_trait;

use crate::domain::{NewPost, NewTheme, Post, Theme};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `T` is the stored entity, `N` the not-yet-stored form that storage
/// assigns an id to, and `ID` the primary key.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Every stored entity, in storage (ascending id) order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    async fn exists_by_id(&self, id: ID) -> Result<bool, RepoError>;

    /// Store a new entity and return it with its generated ID.
    async fn insert(&self, entity: N) -> Result<T, RepoError>;

    /// Replace an existing entity. Fails with `RepoError::NotFound` if absent.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i64> {
    /// Posts whose title contains `title`, ignoring case.
    async fn find_all_by_title_containing_ignore_case(
        &self,
        title: &str,
    ) -> Result<Vec<Post>, RepoError>;

    async fn exists_by_theme_id(&self, theme_id: i64) -> Result<bool, RepoError>;
}

/// Theme repository.
#[async_trait]
pub trait ThemeRepository: BaseRepository<Theme, NewTheme, i64> {
    /// Themes whose description contains `description`, ignoring case.
    async fn find_all_by_description_containing_ignore_case(
        &self,
        description: &str,
    ) -> Result<Vec<Theme>, RepoError>;
}
