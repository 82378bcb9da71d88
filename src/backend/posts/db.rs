//! Database operations for posts, comments and likes

use sqlx::SqlitePool;

use crate::backend::posts::types::{
    Comment, PostLike, PostSorting, UserPost, UserPostWithLikes,
};

const POSTS_WITH_LIKES: &str = r#"
    SELECT posts.id, posts.body, posts.user_id, COUNT(likes.id) AS likes
    FROM posts
    LEFT JOIN likes ON likes.post_id = posts.id
"#;

/// Create a new post owned by `user_id`
pub async fn create_post(
    pool: &SqlitePool,
    body: &str,
    user_id: i64,
) -> Result<UserPost, sqlx::Error> {
    sqlx::query_as::<_, UserPost>(
        r#"
        INSERT INTO posts (body, user_id)
        VALUES (?, ?)
        RETURNING id, body, user_id
        "#,
    )
    .bind(body)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// All posts with their like counts
pub async fn list_posts(
    pool: &SqlitePool,
    sorting: PostSorting,
) -> Result<Vec<UserPostWithLikes>, sqlx::Error> {
    let query = format!(
        "{POSTS_WITH_LIKES} GROUP BY posts.id ORDER BY {}",
        sorting.order_by()
    );
    sqlx::query_as::<_, UserPostWithLikes>(&query)
        .fetch_all(pool)
        .await
}

/// Get a post with its like count
pub async fn find_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Option<UserPostWithLikes>, sqlx::Error> {
    let query = format!("{POSTS_WITH_LIKES} WHERE posts.id = ? GROUP BY posts.id");
    sqlx::query_as::<_, UserPostWithLikes>(&query)
        .bind(post_id)
        .fetch_optional(pool)
        .await
}

pub async fn post_exists(pool: &SqlitePool, post_id: i64) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM posts WHERE id = ?")
        .bind(post_id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn create_comment(
    pool: &SqlitePool,
    body: &str,
    post_id: i64,
    user_id: i64,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (body, post_id, user_id)
        VALUES (?, ?, ?)
        RETURNING id, body, post_id, user_id
        "#,
    )
    .bind(body)
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Comments on a post, oldest first
pub async fn comments_for_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, body, post_id, user_id
        FROM comments
        WHERE post_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

pub async fn create_like(
    pool: &SqlitePool,
    post_id: i64,
    user_id: i64,
) -> Result<PostLike, sqlx::Error> {
    sqlx::query_as::<_, PostLike>(
        r#"
        INSERT INTO likes (post_id, user_id)
        VALUES (?, ?)
        RETURNING id, post_id, user_id
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}
