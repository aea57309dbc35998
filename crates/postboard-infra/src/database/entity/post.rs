//! Post entity for SeaORM.

use postboard_core::domain::{Post, PostDraft};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl ActiveModel {
    /// Row for a new post; the id is left for the database to assign.
    pub fn for_insert(draft: PostDraft, now: DateTimeWithTimeZone) -> Self {
        Self {
            id: NotSet,
            title: Set(draft.title),
            content: Set(draft.content),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Changes for an existing post. `id` and `created_at` are not written.
    pub fn for_update(post: Post, now: DateTimeWithTimeZone) -> Self {
        Self {
            id: Unchanged(post.id),
            title: Set(post.title),
            content: Set(post.content),
            created_at: Unchanged(post.created_at.into()),
            updated_at: Set(now),
        }
    }
}
