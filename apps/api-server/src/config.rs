//! Application configuration loaded from environment variables.

use std::env;

use postboard_infra::DatabaseConfig;

#[cfg(feature = "github-oauth")]
use postboard_infra::GithubOAuthConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    #[cfg(feature = "github-oauth")]
    pub github: Option<GithubOAuthConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            #[cfg(feature = "github-oauth")]
            github: Self::github_from_env(),
        }
    }

    /// GitHub OAuth app settings; absent unless GITHUB_CLIENT_ID is set.
    #[cfg(feature = "github-oauth")]
    fn github_from_env() -> Option<GithubOAuthConfig> {
        let client_id = env::var("GITHUB_CLIENT_ID").ok()?;
        let mut github = GithubOAuthConfig::new(
            client_id,
            env::var("GITHUB_CLIENT_SECRET").unwrap_or_default(),
            env::var("GITHUB_CALLBACK_URL").unwrap_or_default(),
        );

        if let Ok(scope) = env::var("GITHUB_OAUTH_SCOPE") {
            github.scope = scope;
        }
        if let Ok(url) = env::var("GITHUB_AUTHORIZE_URL") {
            github.authorize_url = url;
        }
        if let Ok(url) = env::var("GITHUB_TOKEN_URL") {
            github.token_url = url;
        }

        Some(github)
    }
}
