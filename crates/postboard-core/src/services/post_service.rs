use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;
use crate::ports::PostRepository;

/// Post use cases on top of a [`PostRepository`].
///
/// Absence is reported as `None` (or `false` for delete) rather than as an
/// error so the transport layer decides how to surface it.
pub struct PostService<'a> {
    posts: &'a dyn PostRepository,
}

impl<'a> PostService<'a> {
    pub fn new(posts: &'a dyn PostRepository) -> Self {
        Self { posts }
    }

    pub async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let post = self.posts.insert(draft).await?;
        tracing::debug!(post_id = post.id, "Post created");
        Ok(post)
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        self.posts.list(skip, limit).await
    }

    pub async fn get(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        self.posts.get(id).await
    }

    /// Replace title and content of an existing post.
    pub async fn update(&self, id: PostId, draft: PostDraft) -> Result<Option<Post>, RepoError> {
        let Some(mut post) = self.posts.get(id).await? else {
            return Ok(None);
        };

        post.revise(draft);
        let updated = self.posts.update(post).await?;
        tracing::debug!(post_id = id, "Post updated");
        Ok(Some(updated))
    }

    /// Returns `false` when no post has this id.
    pub async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let Some(post) = self.posts.get(id).await? else {
            return Ok(false);
        };

        self.posts.delete(post).await?;
        tracing::debug!(post_id = id, "Post deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use super::*;

    /// Vec-backed repository that records the calls it receives.
    #[derive(Default)]
    struct FakeRepo {
        rows: Mutex<Vec<Post>>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeRepo {
        fn with_post(title: &str) -> Self {
            let repo = Self::default();
            let now = Utc::now();
            repo.rows.lock().unwrap().push(Post {
                id: 1,
                title: title.to_string(),
                content: "body".to_string(),
                created_at: now,
                updated_at: now,
            });
            repo
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostRepository for FakeRepo {
        async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError> {
            self.calls.lock().unwrap().push("insert");
            let mut rows = self.rows.lock().unwrap();
            let now = Utc::now();
            let post = Post {
                id: rows.len() as PostId + 1,
                title: draft.title,
                content: draft.content,
                created_at: now,
                updated_at: now,
            };
            rows.push(post.clone());
            Ok(post)
        }

        async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
            self.calls.lock().unwrap().push("list");
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn get(&self, id: PostId) -> Result<Option<Post>, RepoError> {
            self.calls.lock().unwrap().push("get");
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|p| p.id == id).cloned())
        }

        async fn update(&self, mut post: Post) -> Result<Post, RepoError> {
            self.calls.lock().unwrap().push("update");
            post.updated_at = post.updated_at + Duration::seconds(1);
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|p| p.id == post.id)
                .ok_or(RepoError::NotFound)?;
            *slot = post.clone();
            Ok(post)
        }

        async fn delete(&self, post: Post) -> Result<(), RepoError> {
            self.calls.lock().unwrap().push("delete");
            self.rows.lock().unwrap().retain(|p| p.id != post.id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_builds_post_from_draft() {
        let repo = FakeRepo::default();
        let service = PostService::new(&repo);

        let post = service.create(PostDraft::new("A", "B")).await.unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.title, "A");
        assert_eq!(post.content, "B");
        assert!(post.created_at <= post.updated_at);
        assert_eq!(repo.calls(), vec!["insert"]);
    }

    #[tokio::test]
    async fn list_passes_skip_and_limit_through() {
        let repo = FakeRepo::default();
        let service = PostService::new(&repo);
        for i in 0..5 {
            service
                .create(PostDraft::new(format!("t{i}"), "c"))
                .await
                .unwrap();
        }

        let page = service.list(1, 2).await.unwrap();

        let titles: Vec<_> = page.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["t1", "t2"]);
    }

    #[tokio::test]
    async fn get_missing_post_is_none() {
        let repo = FakeRepo::default();
        let service = PostService::new(&repo);

        assert!(service.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_overwrites_title_and_content() {
        let repo = FakeRepo::with_post("old");
        let service = PostService::new(&repo);
        let before = service.get(1).await.unwrap().unwrap();

        let after = service
            .update(1, PostDraft::new("C", "D"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.title, "C");
        assert_eq!(after.content, "D");
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn update_missing_post_skips_write() {
        let repo = FakeRepo::default();
        let service = PostService::new(&repo);

        let result = service.update(9, PostDraft::new("C", "D")).await.unwrap();

        assert!(result.is_none());
        assert_eq!(repo.calls(), vec!["get"]);
    }

    #[tokio::test]
    async fn delete_reports_whether_post_existed() {
        let repo = FakeRepo::with_post("doomed");
        let service = PostService::new(&repo);

        assert!(service.delete(1).await.unwrap());
        assert!(!service.delete(1).await.unwrap());
        assert!(service.get(1).await.unwrap().is_none());
        assert_eq!(repo.calls(), vec!["get", "delete", "get", "get"]);
    }
}
