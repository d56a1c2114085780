//! Post resource.

use actix_web::{HttpResponse, http::header, web};
use validator::Validate;

use blog_core::DomainError;
use blog_core::domain::{PageRequest, PostId};
use blog_shared::{PageQuery, PostDto};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostDto>,
) -> AppResult<HttpResponse> {
    let post = body.into_inner();
    tracing::debug!(?post, "REST request to save Post");

    post.validate()?;
    if post.id.is_some() {
        return Err(AppError::BadRequest(
            "A new post cannot already have an ID".to_string(),
        ));
    }

    let result = state.posts.save(post).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::Internal("Saved post has no id".to_string()))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/posts/{}", id)))
        .json(result))
}

/// PUT /api/v1/posts
pub async fn update_post(
    state: web::Data<AppState>,
    body: web::Json<PostDto>,
) -> AppResult<HttpResponse> {
    let post = body.into_inner();
    tracing::debug!(?post, "REST request to update Post");

    post.validate()?;
    if post.id.is_none() {
        return Err(AppError::BadRequest("Invalid id".to_string()));
    }

    let result = state.posts.save(post).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/v1/posts?page=&size=&sort=
pub async fn get_all_posts(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    tracing::debug!(?query, "REST request to get Posts by page");

    let request = PageRequest::try_from(query)?;
    let page = state.posts.find_all_by_page(request).await?;
    Ok(HttpResponse::Ok().json(page.into_response()))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::debug!(post_id = id, "REST request to get Post");

    let post = state
        .posts
        .find_one(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::debug!(post_id = id, "REST request to delete Post");

    state.posts.delete(id).await?;
    Ok(HttpResponse::Ok().finish())
}
