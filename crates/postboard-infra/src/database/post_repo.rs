//! SeaORM implementation of the post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect, Select,
};

use postboard_core::domain::{Post, PostDraft, PostId};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// Post repository over any SeaORM connection.
///
/// Inside a request `C` is a `DatabaseTransaction`; tests use a mock
/// connection directly.
pub struct SeaOrmPostRepository<C> {
    conn: C,
}

impl<C> SeaOrmPostRepository<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    pub fn into_inner(self) -> C {
        self.conn
    }
}

/// Largest OFFSET/LIMIT Postgres accepts as a bigint.
const MAX_BIND: u64 = i64::MAX as u64;

/// Newest first; id breaks ties between posts created in the same instant.
///
/// Offset and limit are clamped to the bigint range.
pub(crate) fn list_query(offset: u64, limit: u64) -> Select<PostEntity> {
    PostEntity::find()
        .order_by_desc(post::Column::CreatedAt)
        .order_by_desc(post::Column::Id)
        .offset(offset.min(MAX_BIND))
        .limit(limit.min(MAX_BIND))
}

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl<C> PostRepository for SeaOrmPostRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel::for_insert(draft, now.into())
            .insert(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let rows = list_query(offset, limit)
            .all(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let now = Utc::now().max(post.created_at);
        let model = post::ActiveModel::for_update(post, now.into())
            .update(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, post: Post) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(post.id)
            .exec(&self.conn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
