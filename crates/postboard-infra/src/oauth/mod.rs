//! OAuth provider clients.

mod github;

pub use github::{GithubOAuthClient, GithubOAuthConfig};
