use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

use super::{Table, contains_ignore_case};

/// Post repository backed by a `BTreeMap` behind an async `RwLock`.
pub struct InMemoryPostRepository {
    store: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, NewPost, i64> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.contains_key(&id))
    }

    async fn insert(&self, entity: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = Post {
            id: store.allocate_id(),
            title: entity.title,
            text: entity.text,
            created_at: entity.created_at,
            theme_id: entity.theme_id,
        };
        store.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let slot = store.rows.get_mut(&entity.id).ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all_by_title_containing_ignore_case(
        &self,
        title: &str,
    ) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .filter(|post| contains_ignore_case(&post.title, title))
            .cloned()
            .collect())
    }

    async fn exists_by_theme_id(&self, theme_id: i64) -> Result<bool, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.values().any(|post| post.theme_id == theme_id))
    }
}
