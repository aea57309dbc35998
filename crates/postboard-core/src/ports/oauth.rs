//! OAuth login port.
//!
//! The provider-side token exchange is an external collaborator; this
//! crate only fixes the shape of the conversation.

use async_trait::async_trait;

/// Token returned by a successful code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub scope: String,
}

/// OAuth authorization-code flow against an external provider.
#[async_trait]
pub trait OAuthClient: Send + Sync {
    /// URL the browser is redirected to for consent.
    fn authorize_url(&self) -> Result<String, AuthError>;

    /// Exchange an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<AccessToken, AuthError>;
}

/// OAuth errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid OAuth configuration: {0}")]
    Configuration(String),

    #[error("Token exchange failed")]
    TokenExchange,

    #[error("OAuth provider unreachable: {0}")]
    Provider(String),
}
