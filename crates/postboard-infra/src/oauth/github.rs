//! GitHub OAuth app client.

use async_trait::async_trait;
use reqwest::{Url, header};
use serde::{Deserialize, Serialize};

use postboard_core::ports::{AccessToken, AuthError, OAuthClient};

pub const DEFAULT_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
pub const DEFAULT_SCOPE: &str = "repo read:user";

/// GitHub OAuth app settings.
#[derive(Debug, Clone)]
pub struct GithubOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub scope: String,
    pub authorize_url: String,
    pub token_url: String,
}

impl GithubOAuthConfig {
    /// Settings for github.com with the default scope.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url: callback_url.into(),
            scope: DEFAULT_SCOPE.to_string(),
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    redirect_uri: &'a str,
}

/// GitHub answers 200 with an `error` field on most failures.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    token_type: Option<String>,
    scope: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

impl TokenResponse {
    fn into_token(self) -> Result<AccessToken, AuthError> {
        match self.access_token {
            Some(access_token) if !access_token.is_empty() => Ok(AccessToken {
                access_token,
                token_type: self.token_type.unwrap_or_else(|| "bearer".to_string()),
                scope: self.scope.unwrap_or_default(),
            }),
            _ => {
                tracing::warn!(
                    error = self.error.as_deref().unwrap_or("none"),
                    description = self.error_description.as_deref().unwrap_or(""),
                    "GitHub token exchange returned no access token"
                );
                Err(AuthError::TokenExchange)
            }
        }
    }
}

/// Authorization-code flow against GitHub.
pub struct GithubOAuthClient {
    config: GithubOAuthConfig,
    http: reqwest::Client,
}

impl GithubOAuthClient {
    pub fn new(config: GithubOAuthConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl OAuthClient for GithubOAuthClient {
    fn authorize_url(&self) -> Result<String, AuthError> {
        let url = Url::parse_with_params(
            &self.config.authorize_url,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.callback_url.as_str()),
                ("scope", self.config.scope.as_str()),
            ],
        )
        .map_err(|e| AuthError::Configuration(e.to_string()))?;

        Ok(url.into())
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, AuthError> {
        let request = TokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            code,
            redirect_uri: &self.config.callback_url,
        };

        let response = self
            .http
            .post(&self.config.token_url)
            .header(header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Provider(format!(
                "token endpoint returned {status}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        body.into_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GithubOAuthClient {
        GithubOAuthClient::new(GithubOAuthConfig::new(
            "abc123",
            "shh",
            "http://localhost:8080/auth/callback",
        ))
    }

    #[test]
    fn authorize_url_carries_client_callback_and_scope() {
        let url = Url::parse(&client().authorize_url().unwrap()).unwrap();

        assert_eq!(url.host_str(), Some("github.com"));
        assert_eq!(url.path(), "/login/oauth/authorize");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("client_id".to_string(), "abc123".to_string()),
                (
                    "redirect_uri".to_string(),
                    "http://localhost:8080/auth/callback".to_string()
                ),
                ("scope".to_string(), "repo read:user".to_string()),
            ]
        );
    }

    #[test]
    fn malformed_authorize_url_is_a_configuration_error() {
        let mut config = GithubOAuthConfig::new("id", "secret", "cb");
        config.authorize_url = "not a url".to_string();

        let err = GithubOAuthClient::new(config).authorize_url().unwrap_err();

        assert!(matches!(err, AuthError::Configuration(_)));
    }

    #[test]
    fn token_response_with_access_token() {
        let body: TokenResponse = serde_json::from_str(
            r#"{"access_token":"gho_x","token_type":"bearer","scope":"repo,read:user"}"#,
        )
        .unwrap();

        let token = body.into_token().unwrap();

        assert_eq!(token.access_token, "gho_x");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.scope, "repo,read:user");
    }

    #[test]
    fn token_response_with_error_is_rejected() {
        let body: TokenResponse = serde_json::from_str(
            r#"{"error":"bad_verification_code","error_description":"The code passed is incorrect or expired."}"#,
        )
        .unwrap();

        assert!(matches!(body.into_token(), Err(AuthError::TokenExchange)));
    }
}
