//! Posts Module
//!
//! Posts, comments on posts and likes.
//!
//! - **`types`** - request and response bodies, listing order
//! - **`db`** - queries against `posts`, `comments` and `likes`
//! - **`handlers`** - Axum handlers

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{
    create_comment, create_post, get_all_posts, get_comments_on_post, get_post_with_comments,
    like_post,
};
pub use types::PostSorting;
