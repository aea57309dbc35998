use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;

/// Data access for posts.
///
/// Every method completes its statement before returning. Implementations
/// are scoped to a single unit of work; see [`Store`](super::Store).
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post. The store assigns the id and both timestamps.
    async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Posts ordered by `created_at` descending (newest first, ties by id
    /// descending), skipping `offset` and returning at most `limit`.
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Find a post by id.
    async fn get(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Write an already-revised post over its stored row and refresh
    /// `updated_at`. Returns the stored record.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove a post.
    async fn delete(&self, post: Post) -> Result<(), RepoError>;
}
