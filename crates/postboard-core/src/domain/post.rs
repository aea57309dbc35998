use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a post.
pub type PostId = i32;

/// Post entity - a stored blog post.
///
/// `id` and `created_at` never change after the store assigns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Overwrite the editable fields with those of `draft`.
    pub fn revise(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
    }
}

/// The caller-supplied part of a post, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revise_keeps_identity_and_timestamps() {
        let created = Utc::now();
        let mut post = Post {
            id: 7,
            title: "A".to_string(),
            content: "B".to_string(),
            created_at: created,
            updated_at: created,
        };

        post.revise(PostDraft::new("C", "D"));

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "C");
        assert_eq!(post.content, "D");
        assert_eq!(post.created_at, created);
        assert_eq!(post.updated_at, created);
    }
}
