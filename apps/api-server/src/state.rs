//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::{OAuthClient, Store};
use postboard_infra::{DatabaseConfig, InMemoryStore};

#[cfg(feature = "postgres")]
use postboard_infra::{SeaOrmStore, database};

#[cfg(feature = "github-oauth")]
use postboard_infra::GithubOAuthClient;

use crate::config::AppConfig;
use crate::middleware::error::AppError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub oauth: Option<Arc<dyn OAuthClient>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let store = Self::init_store(config.database.as_ref()).await;
        let oauth = Self::init_oauth(config);

        tracing::info!(
            storage = store.kind(),
            oauth = oauth.is_some(),
            "Application state initialized"
        );

        Self { store, oauth }
    }

    /// State over explicit collaborators.
    #[cfg(test)]
    pub fn from_parts(store: Arc<dyn Store>, oauth: Option<Arc<dyn OAuthClient>>) -> Self {
        Self { store, oauth }
    }

    /// The OAuth client, or 503 when login is not configured.
    pub fn oauth(&self) -> Result<&dyn OAuthClient, AppError> {
        self.oauth.as_deref().ok_or_else(|| {
            AppError::ServiceUnavailable("GitHub OAuth is not configured".to_string())
        })
    }

    #[cfg(feature = "postgres")]
    async fn init_store(db_config: Option<&DatabaseConfig>) -> Arc<dyn Store> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryStore::new());
        };

        match database::connect(config).await {
            Ok(db) => {
                if let Err(e) = database::create_schema(&db).await {
                    tracing::error!("Failed to create posts table: {}", e);
                }
                Arc::new(SeaOrmStore::new(db))
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryStore::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn init_store(_db_config: Option<&DatabaseConfig>) -> Arc<dyn Store> {
        tracing::info!("Running without postgres feature - using in-memory store");
        Arc::new(InMemoryStore::new())
    }

    #[cfg(feature = "github-oauth")]
    fn init_oauth(config: &AppConfig) -> Option<Arc<dyn OAuthClient>> {
        match &config.github {
            Some(github) => Some(Arc::new(GithubOAuthClient::new(github.clone()))),
            None => {
                tracing::warn!("GITHUB_CLIENT_ID not set. /auth routes will answer 503.");
                None
            }
        }
    }

    #[cfg(not(feature = "github-oauth"))]
    fn init_oauth(_config: &AppConfig) -> Option<Arc<dyn OAuthClient>> {
        None
    }
}
