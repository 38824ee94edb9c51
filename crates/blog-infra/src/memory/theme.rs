use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{NewTheme, Theme};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, ThemeRepository};

use super::{Table, contains_ignore_case};

/// Theme repository backed by a `BTreeMap` behind an async `RwLock`.
pub struct InMemoryThemeRepository {
    store: RwLock<Table<Theme>>,
}

impl InMemoryThemeRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryThemeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Theme, NewTheme, i64> for InMemoryThemeRepository {
    async fn find_all(&self) -> Result<Vec<Theme>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Theme>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.contains_key(&id))
    }

    async fn insert(&self, entity: NewTheme) -> Result<Theme, RepoError> {
        let mut store = self.store.write().await;
        let theme = Theme {
            id: store.allocate_id(),
            description: entity.description,
        };
        store.rows.insert(theme.id, theme.clone());
        Ok(theme)
    }

    async fn update(&self, entity: Theme) -> Result<Theme, RepoError> {
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
impl ThemeRepository for InMemoryThemeRepository {
    async fn find_all_by_description_containing_ignore_case(
        &self,
        description: &str,
    ) -> Result<Vec<Theme>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .filter(|theme| contains_ignore_case(&theme.description, description))
            .cloned()
            .collect())
    }
}
