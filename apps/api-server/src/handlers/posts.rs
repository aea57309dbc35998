//! Post handlers. Each request runs in its own unit of work.

use actix_web::{HttpResponse, web};
use futures::future::BoxFuture;

use postboard_core::domain::{Post, PostDraft, PostId};
use postboard_core::error::RepoError;
use postboard_core::ports::in_unit_of_work;
use postboard_core::services::PostService;
use postboard_shared::dto::{
    CreatePostRequest, DeletePostResponse, ListPostsQuery, PostResponse, UpdatePostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Run `work` against a [`PostService`] bound to a fresh unit of work.
async fn with_posts<T, F>(state: &AppState, work: F) -> AppResult<T>
where
    F: for<'r> FnOnce(PostService<'r>) -> BoxFuture<'r, Result<T, RepoError>>,
{
    in_unit_of_work(state.store.as_ref(), move |posts| {
        work(PostService::new(posts))
    })
    .await
    .map_err(AppError::from)
}

/// Ids outside the store's key range cannot name a post.
fn post_id(raw: i64) -> AppResult<PostId> {
    PostId::try_from(raw).map_err(|_| AppError::post_not_found())
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// POST /posts/
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = PostDraft::new(req.title, req.content);

    let post = with_posts(&state, |posts| {
        Box::pin(async move { posts.create(draft).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// GET /posts/?skip=&limit=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let ListPostsQuery { skip, limit } = query.into_inner();

    let posts = with_posts(&state, |posts| {
        Box::pin(async move { posts.list(skip, limit).await })
    })
    .await?;

    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = post_id(path.into_inner())?;

    let post = with_posts(&state, |posts| Box::pin(async move { posts.get(id).await }))
        .await?
        .ok_or_else(AppError::post_not_found)?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = post_id(path.into_inner())?;
    let req = body.into_inner();
    let draft = PostDraft::new(req.title, req.content);

    let post = with_posts(&state, |posts| {
        Box::pin(async move { posts.update(id, draft).await })
    })
    .await?
    .ok_or_else(AppError::post_not_found)?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = post_id(path.into_inner())?;

    let deleted = with_posts(&state, |posts| Box::pin(async move { posts.delete(id).await }))
        .await?;

    if !deleted {
        return Err(AppError::post_not_found());
    }

    Ok(HttpResponse::Ok().json(DeletePostResponse { ok: true }))
}
