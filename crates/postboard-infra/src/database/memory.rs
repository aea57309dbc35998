//! In-memory store - used as fallback when no database is configured.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use postboard_core::domain::{Post, PostDraft, PostId};
use postboard_core::error::RepoError;
use postboard_core::ports::{PostRepository, Store, UnitOfWork};

#[derive(Default)]
struct PostTable {
    last_id: PostId,
    rows: BTreeMap<PostId, Post>,
}

/// Store keeping posts in a process-local map.
///
/// Each repository call applies immediately, so commit and rollback only
/// release the unit of work. Data is lost on process restart.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    table: Arc<RwLock<PostTable>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository over this store's table, outside any unit of work.
    pub fn repository(&self) -> InMemoryPostRepository {
        InMemoryPostRepository {
            table: self.table.clone(),
        }
    }
}

/// Repository half of [`InMemoryStore`].
pub struct InMemoryPostRepository {
    table: Arc<RwLock<PostTable>>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let now = Utc::now();
        let post = Post {
            id: table.last_id,
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(post.id, post.clone());

        Ok(post)
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        let mut posts: Vec<Post> = table.rows.values().cloned().collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(posts.into_iter().skip(offset).take(limit).collect())
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, mut post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let stored = table.rows.get_mut(&post.id).ok_or(RepoError::NotFound)?;

        // The stored row owns the immutable fields.
        post.created_at = stored.created_at;
        post.updated_at = Utc::now().max(stored.updated_at);
        *stored = post.clone();

        Ok(post)
    }

    async fn delete(&self, post: Post) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        match table.rows.remove(&post.id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

struct MemoryUnit {
    posts: InMemoryPostRepository,
}

#[async_trait]
impl UnitOfWork for MemoryUnit {
    fn posts(&self) -> &dyn PostRepository {
        &self.posts
    }

    async fn commit(self: Box<Self>) -> Result<(), RepoError> {
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepoError> {
        Ok(())
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError> {
        Ok(Box::new(MemoryUnit {
            posts: self.repository(),
        }))
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
