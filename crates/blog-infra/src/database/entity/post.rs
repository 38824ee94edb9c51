//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_postagens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "titulo")]
    pub title: String,
    #[sea_orm(column_name = "texto", column_type = "Text")]
    pub text: String,
    #[sea_orm(column_name = "data")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "tema_id")]
    pub theme_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::theme::Entity",
        from = "Column::ThemeId",
        to = "super::theme::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Theme,
}

impl Related<super::theme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Theme.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for blog_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            text: model.text,
            created_at: model.created_at.into(),
            theme_id: model.theme_id,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<blog_core::domain::Post> for ActiveModel {
    fn from(post: blog_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            text: Set(post.text),
            created_at: Set(post.created_at.into()),
            theme_id: Set(post.theme_id),
        }
    }
}

/// A new post leaves the id to the database sequence.
impl From<blog_core::domain::NewPost> for ActiveModel {
    fn from(post: blog_core::domain::NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            text: Set(post.text),
            created_at: Set(post.created_at.into()),
            theme_id: Set(post.theme_id),
        }
    }
}
