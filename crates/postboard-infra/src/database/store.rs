//! SeaORM store: one database transaction per unit of work.

use async_trait::async_trait;
use sea_orm::{DatabaseTransaction, DbConn, TransactionTrait};

use postboard_core::error::RepoError;
use postboard_core::ports::{PostRepository, Store, UnitOfWork};

use super::post_repo::{SeaOrmPostRepository, map_db_err};

/// Store backed by a SeaORM connection pool.
pub struct SeaOrmStore {
    db: DbConn,
}

impl SeaOrmStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// A database transaction checked out of the pool. Dropping it rolls back.
struct TransactionUnit {
    posts: SeaOrmPostRepository<DatabaseTransaction>,
}

#[async_trait]
impl UnitOfWork for TransactionUnit {
    fn posts(&self) -> &dyn PostRepository {
        &self.posts
    }

    async fn commit(self: Box<Self>) -> Result<(), RepoError> {
        self.posts.into_inner().commit().await.map_err(map_db_err)
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepoError> {
        self.posts.into_inner().rollback().await.map_err(map_db_err)
    }
}

#[async_trait]
impl Store for SeaOrmStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        Ok(Box::new(TransactionUnit {
            posts: SeaOrmPostRepository::new(txn),
        }))
    }

    fn kind(&self) -> &'static str {
        "postgres"
    }
}
