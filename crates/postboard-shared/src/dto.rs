//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /posts/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Body of `PUT /posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

/// Query string of `GET /posts/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "ListPostsQuery::default_limit")]
    pub limit: u64,
}

impl ListPostsQuery {
    fn default_limit() -> u64 {
        100
    }
}

/// A post as returned by every posts endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a successful `DELETE /posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub ok: bool,
}

/// Query string of `GET /auth/callback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
}

/// Response containing the token obtained from the OAuth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub scope: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults() {
        let query: ListPostsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 100);
    }

    #[test]
    fn post_response_uses_rfc3339_timestamps() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let body = serde_json::to_value(PostResponse {
            id: 1,
            title: "A".to_string(),
            content: "B".to_string(),
            created_at: at,
            updated_at: at,
        })
        .unwrap();

        assert_eq!(body["id"], 1);
        assert_eq!(body["created_at"], "2024-05-01T12:00:00Z");
    }
}
