//! Request and response bodies of the post, comment and like endpoints

use serde::{Deserialize, Serialize};

/// New post payload. The owner comes from the bearer token.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserPostIn {
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserPost {
    pub id: i64,
    pub body: String,
    pub user_id: i64,
}

/// Post with its like count, as listed by `GET /post`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserPostWithLikes {
    pub id: i64,
    pub body: String,
    pub user_id: i64,
    pub likes: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CommentIn {
    pub body: String,
    pub post_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub body: String,
    pub post_id: i64,
    pub user_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserPostWithComments {
    pub post: UserPostWithLikes,
    pub comments: Vec<Comment>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PostLikeIn {
    pub post_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PostLike {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
}

/// Order of `GET /post`
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostSorting {
    /// Newest first
    #[default]
    New,
    /// Oldest first
    Old,
    /// Most liked first, newest first among ties
    MostLikes,
}

impl PostSorting {
    /// ORDER BY clause for the listing query
    pub(crate) fn order_by(self) -> &'static str {
        match self {
            PostSorting::New => "posts.id DESC",
            PostSorting::Old => "posts.id ASC",
            PostSorting::MostLikes => "likes DESC, posts.id DESC",
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct PostQuery {
    #[serde(default)]
    pub sorting: PostSorting,
}
