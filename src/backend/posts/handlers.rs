/**
 * Post, Comment and Like Handlers
 *
 * Reading is public. Creating anything requires a bearer token; the owner of
 * the new row is always the authenticated user.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db;
use crate::backend::posts::types::{
    Comment, CommentIn, PostLike, PostLikeIn, PostQuery, UserPost, UserPostIn,
    UserPostWithComments, UserPostWithLikes,
};
use crate::shared::validation::validate_body;

/// POST /post
pub async fn create_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Json(request): Json<UserPostIn>,
) -> Result<(StatusCode, Json<UserPost>), BackendError> {
    validate_body(&request.body)?;

    let post = db::create_post(&pool, &request.body, user.id).await?;
    tracing::info!(post_id = post.id, user_id = user.id, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /post?sorting=new|old|most_likes
pub async fn get_all_posts(
    State(pool): State<SqlitePool>,
    Query(query): Query<PostQuery>,
) -> Result<Json<Vec<UserPostWithLikes>>, BackendError> {
    tracing::debug!(sorting = ?query.sorting, "Listing posts");
    let posts = db::list_posts(&pool, query.sorting).await?;
    Ok(Json(posts))
}

/// GET /post/{post_id}
pub async fn get_post_with_comments(
    State(pool): State<SqlitePool>,
    Path(post_id): Path<i64>,
) -> Result<Json<UserPostWithComments>, BackendError> {
    let post = db::find_post(&pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))?;
    let comments = db::comments_for_post(&pool, post_id).await?;

    Ok(Json(UserPostWithComments { post, comments }))
}

/// POST /comment
pub async fn create_comment(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CommentIn>,
) -> Result<(StatusCode, Json<Comment>), BackendError> {
    validate_body(&request.body)?;
    ensure_post(&pool, request.post_id).await?;

    let comment = db::create_comment(&pool, &request.body, request.post_id, user.id).await?;
    tracing::info!(comment_id = comment.id, post_id = comment.post_id, "Comment created");

    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /post/{post_id}/comment
pub async fn get_comments_on_post(
    State(pool): State<SqlitePool>,
    Path(post_id): Path<i64>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    Ok(Json(db::comments_for_post(&pool, post_id).await?))
}

/// POST /like
pub async fn like_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Json(request): Json<PostLikeIn>,
) -> Result<(StatusCode, Json<PostLike>), BackendError> {
    ensure_post(&pool, request.post_id).await?;

    let like = db::create_like(&pool, request.post_id, user.id).await?;
    tracing::info!(post_id = like.post_id, user_id = user.id, "Post liked");

    Ok((StatusCode::CREATED, Json(like)))
}

async fn ensure_post(pool: &SqlitePool, post_id: i64) -> Result<(), BackendError> {
    if db::post_exists(pool, post_id).await? {
        Ok(())
    } else {
        tracing::warn!(post_id, "Post not found");
        Err(BackendError::not_found("Post"))
    }
}
