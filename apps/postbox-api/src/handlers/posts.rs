//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use postbox_core::domain::PostDraft;
use postbox_shared::{DataResponse, PostDetailResponse, PostRequest, UpdatedResponse};
use serde_json::Value;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Validate a raw body and turn it into a draft.
fn into_draft(body: web::Json<Value>) -> AppResult<PostDraft> {
    let req = PostRequest::from_json(body.into_inner()).map_err(AppError::Validation)?;
    Ok(PostDraft::new(req.title, req.content)
        .with_published(req.published)
        .with_rating(req.rating))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(DataResponse { data: posts }))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let draft = into_draft(body)?;
    let post = draft.into_post(state.ids.next_id());
    let saved = state.posts.insert(post).await?;

    tracing::info!(post_id = saved.id, "Post created");

    Ok(HttpResponse::Created().json(DataResponse { data: saved }))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(id))?;

    Ok(HttpResponse::Ok().json(PostDetailResponse { post_detail: post }))
}

/// PUT /posts/{id} - replaces every field; the id always comes from the path.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let updated = state.posts.replace(id, into_draft(body)?).await?;

    tracing::info!(post_id = id, "Post updated");

    Ok(HttpResponse::Ok().json(UpdatedResponse {
        updated_data: updated,
    }))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.remove(id).await?;

    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
