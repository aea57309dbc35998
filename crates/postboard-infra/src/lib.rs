//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory store only
//! - `postgres` - PostgreSQL storage via SeaORM
//! - `github-oauth` - GitHub OAuth code exchange via reqwest

pub mod database;

#[cfg(feature = "github-oauth")]
pub mod oauth;

pub use database::{DatabaseConfig, InMemoryStore};

#[cfg(feature = "postgres")]
pub use database::{SeaOrmPostRepository, SeaOrmStore};

#[cfg(feature = "github-oauth")]
pub use oauth::{GithubOAuthClient, GithubOAuthConfig};
