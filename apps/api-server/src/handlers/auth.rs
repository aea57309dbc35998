//! GitHub OAuth login handlers.
//!
//! The handlers only drive the redirect and the code exchange; no session
//! is issued and no route checks the returned token.

use actix_web::{HttpResponse, http::header, web};

use postboard_shared::dto::{AuthResponse, OAuthCallbackQuery};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /auth/login
pub async fn login(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let url = state.oauth()?.authorize_url()?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, url))
        .finish())
}

/// GET /auth/callback?code=
pub async fn callback(
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> AppResult<HttpResponse> {
    let oauth = state.oauth()?;

    let Some(code) = query.into_inner().code.filter(|c| !c.is_empty()) else {
        return Err(AppError::BadRequest("Missing code".to_string()));
    };

    let token = oauth.exchange_code(&code).await?;
    tracing::info!("OAuth code exchanged");

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token.access_token,
        token_type: token.token_type,
        scope: token.scope,
    }))
}
