//! Per-request units of work.

use async_trait::async_trait;
use futures::future::BoxFuture;

use super::PostRepository;
use crate::error::RepoError;

/// A transactional session bound to one request.
///
/// Dropping a unit of work without committing rolls it back and returns
/// its connection to the pool.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Repository bound to this unit of work.
    fn posts(&self) -> &dyn PostRepository;

    /// Commit all work and release the session.
    async fn commit(self: Box<Self>) -> Result<(), RepoError>;

    /// Discard uncommitted work and release the session.
    async fn rollback(self: Box<Self>) -> Result<(), RepoError>;
}

/// Persistence handle that hands out units of work.
#[async_trait]
pub trait Store: Send + Sync {
    /// Acquire an exclusive unit of work.
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError>;

    /// Short name of the backing store, for health reporting.
    fn kind(&self) -> &'static str;
}

/// Run `work` inside a fresh unit of work.
///
/// The unit of work is committed when `work` succeeds and rolled back when
/// it fails. It is released on every path, including a failed commit.
///
/// ```ignore
/// let post = in_unit_of_work(store, |posts| {
///     Box::pin(async move { PostService::new(posts).get(id).await })
/// })
/// .await?;
/// ```
pub async fn in_unit_of_work<T, E, F>(store: &dyn Store, work: F) -> Result<T, E>
where
    F: for<'r> FnOnce(&'r dyn PostRepository) -> BoxFuture<'r, Result<T, E>>,
    E: From<RepoError>,
{
    let unit = store.begin().await?;
    let outcome = work(unit.posts()).await;

    match outcome {
        Ok(value) => {
            unit.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = unit.rollback().await {
                tracing::warn!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::domain::{Post, PostDraft, PostId};

    use super::*;

    struct NullRepo;

    #[async_trait]
    impl PostRepository for NullRepo {
        async fn insert(&self, _draft: PostDraft) -> Result<Post, RepoError> {
            Err(RepoError::Query("read-only".to_string()))
        }

        async fn list(&self, _offset: u64, _limit: u64) -> Result<Vec<Post>, RepoError> {
            Ok(Vec::new())
        }

        async fn get(&self, _id: PostId) -> Result<Option<Post>, RepoError> {
            Ok(None)
        }

        async fn update(&self, _post: Post) -> Result<Post, RepoError> {
            Err(RepoError::NotFound)
        }

        async fn delete(&self, _post: Post) -> Result<(), RepoError> {
            Ok(())
        }
    }

    /// Store whose units of work log how they ended.
    #[derive(Default)]
    struct RecordingStore {
        endings: Arc<Mutex<Vec<&'static str>>>,
    }

    struct RecordingUnit {
        repo: NullRepo,
        endings: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl UnitOfWork for RecordingUnit {
        fn posts(&self) -> &dyn PostRepository {
            &self.repo
        }

        async fn commit(self: Box<Self>) -> Result<(), RepoError> {
            self.endings.lock().unwrap().push("commit");
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), RepoError> {
            self.endings.lock().unwrap().push("rollback");
            Ok(())
        }
    }

    #[async_trait]
    impl Store for RecordingStore {
        async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError> {
            Ok(Box::new(RecordingUnit {
                repo: NullRepo,
                endings: self.endings.clone(),
            }))
        }

        fn kind(&self) -> &'static str {
            "recording"
        }
    }

    #[tokio::test]
    async fn commits_when_work_succeeds() {
        let store = RecordingStore::default();

        let posts: Vec<Post> =
            in_unit_of_work(&store, |repo| Box::pin(async move { repo.list(0, 10).await }))
                .await
                .unwrap();

        assert!(posts.is_empty());
        assert_eq!(*store.endings.lock().unwrap(), vec!["commit"]);
    }

    #[tokio::test]
    async fn rolls_back_when_work_fails() {
        let store = RecordingStore::default();

        let result: Result<Post, RepoError> = in_unit_of_work(&store, |repo| {
            Box::pin(async move { repo.insert(PostDraft::new("A", "B")).await })
        })
        .await;

        assert!(matches!(result, Err(RepoError::Query(_))));
        assert_eq!(*store.endings.lock().unwrap(), vec!["rollback"]);
    }
}
