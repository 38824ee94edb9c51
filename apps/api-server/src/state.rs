//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{PostRepository, ThemeRepository};
use blog_core::services::{PostService, ThemeService};
use blog_infra::database::DatabaseConfig;
use blog_infra::memory::{InMemoryPostRepository, InMemoryThemeRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub themes: Arc<ThemeService>,
    /// Which storage backend the services run on, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let state = match db_config {
            Some(config) => Self::connect(config).await,
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        tracing::info!(storage = state.storage, "Application state initialized");
        state
    }

    /// Wire both services over the given repositories.
    pub fn from_repositories(
        posts: Arc<dyn PostRepository>,
        themes: Arc<dyn ThemeRepository>,
        storage: &'static str,
    ) -> Self {
        Self {
            posts: Arc::new(PostService::new(posts.clone(), themes.clone())),
            themes: Arc::new(ThemeService::new(themes, posts)),
            storage,
        }
    }

    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryThemeRepository::new()),
            "memory",
        )
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &DatabaseConfig) -> Self {
        use blog_infra::database::{PostgresPostRepository, PostgresThemeRepository, connect};

        match connect(config).await {
            Ok(conn) => {
                let conn = Arc::new(conn);
                Self::from_repositories(
                    Arc::new(PostgresPostRepository::new(conn.clone())),
                    Arc::new(PostgresThemeRepository::new(conn)),
                    "postgres",
                )
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_config: &DatabaseConfig) -> Self {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Self::in_memory()
    }
}
