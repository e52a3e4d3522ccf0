//! Post handlers.
//!
//! Form-level checks live here (blank fields on create, ownership). The store
//! itself accepts anything and treats unknown ids as no-ops.

use actix_web::{HttpResponse, web};

use miniblog_core::DomainError;
use miniblog_core::domain::{Post, PostId};
use miniblog_shared::ApiResponse;
use miniblog_shared::dto::{CommentRequest, PostRequest, PostResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_responses(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(Into::into).collect()
}

fn validate(req: &PostRequest) -> Result<(), DomainError> {
    if req.title.trim().is_empty() || req.content.trim().is_empty() {
        return Err(DomainError::Validation(
            "Please fill in both title and content".to_string(),
        ));
    }
    Ok(())
}

/// Load a post and check that `identity` wrote it.
fn owned_post(state: &AppState, id: PostId, identity: &Identity) -> Result<Post, DomainError> {
    let post = state
        .posts
        .get_post_by_id(id)
        .ok_or(DomainError::PostNotFound { id })?;

    if post.author != identity.username {
        return Err(DomainError::NotOwner {
            username: identity.username.clone(),
            id,
        });
    }
    Ok(post)
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = to_responses(state.posts.get_all_posts());
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/mine
pub async fn my_posts(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let posts = to_responses(state.posts.get_posts_by_user(&identity.username));
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .get_post_by_id(id)
        .ok_or(DomainError::PostNotFound { id })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse::from(post))))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate(&req)?;

    let post = state
        .posts
        .add_post(&identity.username, &req.title, &req.content);

    Ok(HttpResponse::Created().json(ApiResponse::ok(PostResponse::from(post))))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<PostId>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    owned_post(&state, id, &identity)?;

    // The post can vanish between the ownership check and the update
    let post = state
        .posts
        .update_post(id, &req.title, &req.content)
        .ok_or(DomainError::PostNotFound { id })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse::from(post))))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    owned_post(&state, id, &identity)?;

    state.posts.delete_post(id);

    Ok(HttpResponse::Ok().json(ApiResponse::done("Post deleted")))
}

/// POST /api/posts/{id}/likes
pub async fn like_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .add_like(path.into_inner(), &identity.username);

    Ok(HttpResponse::Ok().json(ApiResponse::done("Like recorded")))
}

/// POST /api/posts/{id}/comments
pub async fn comment_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<PostId>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if req.text.trim().is_empty() {
        return Ok(HttpResponse::Ok().json(ApiResponse::done("Empty comment skipped")));
    }

    state.posts.add_comment(id, &identity.username, &req.text);

    Ok(HttpResponse::Ok().json(ApiResponse::done("Comment recorded")))
}
