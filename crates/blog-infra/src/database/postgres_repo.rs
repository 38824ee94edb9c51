//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use blog_core::domain::{Post, Theme};
use blog_core::error::RepoError;
use blog_core::ports::{PostRepository, ThemeRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::theme::{self, Entity as ThemeEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL theme repository.
pub type PostgresThemeRepository = PostgresBaseRepository<ThemeEntity>;

/// Build an `ILIKE` pattern matching `needle` anywhere, with LIKE
/// metacharacters taken literally.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all_by_title_containing_ignore_case(
        &self,
        title: &str,
    ) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(title = %title, "Searching posts by title");

        let result = PostEntity::find()
            .filter(Expr::col((PostEntity, post::Column::Title)).ilike(contains_pattern(title)))
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn exists_by_theme_id(&self, theme_id: i64) -> Result<bool, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::ThemeId.eq(theme_id))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.is_some())
    }
}

#[async_trait]
impl ThemeRepository for PostgresThemeRepository {
    async fn find_all_by_description_containing_ignore_case(
        &self,
        description: &str,
    ) -> Result<Vec<Theme>, RepoError> {
        tracing::debug!(description = %description, "Searching themes by description");

        let result = ThemeEntity::find()
            .filter(
                Expr::col((ThemeEntity, theme::Column::Description))
                    .ilike(contains_pattern(description)),
            )
            .order_by_asc(theme::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
