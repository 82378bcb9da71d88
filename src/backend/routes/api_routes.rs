/**
 * API Routes
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /register` - User registration
 * - `POST /token` - Login, returns an access token
 * - `GET /confirm/{token}` - Email confirmation link
 * - `GET /me` - Current user (requires authentication)
 *
 * ## Posts
 * - `POST /post` - Create a post (requires authentication)
 * - `GET /post?sorting=new|old|most_likes` - List posts with like counts
 * - `GET /post/{post_id}` - Post with its comments
 * - `GET /post/{post_id}/comment` - Comments on a post
 * - `POST /comment` - Comment on a post (requires authentication)
 * - `POST /like` - Like a post (requires authentication)
 *
 * ## Uploads
 * - `POST /upload` - Multipart file upload (requires authentication)
 *
 * ## Health
 * - `GET /test-db` - Database connectivity check
 *
 * Protected routes authenticate in the handler through the `AuthUser`
 * extractor rather than a route layer.
 */

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{confirm_email, get_me, login, register};
use crate::backend::posts::{
    create_comment, create_post, get_all_posts, get_comments_on_post, get_post_with_comments,
    like_post,
};
use crate::backend::server::health::test_db;
use crate::backend::server::state::AppState;
use crate::backend::upload::upload_file;

/// Add the authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register))
        .route("/token", post(login))
        .route("/confirm/{token}", get(confirm_email))
        .route("/me", get(get_me))
}

/// Add the post, comment and like routes
pub fn configure_post_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/post", get(get_all_posts).post(create_post))
        .route("/post/{post_id}", get(get_post_with_comments))
        .route("/post/{post_id}/comment", get(get_comments_on_post))
        .route("/comment", post(create_comment))
        .route("/like", post(like_post))
}

/// Add the upload route
///
/// The body limit applies to this route only.
pub fn configure_upload_routes(router: Router<AppState>, max_upload_bytes: usize) -> Router<AppState> {
    router.route(
        "/upload",
        post(upload_file).layer(DefaultBodyLimit::max(max_upload_bytes)),
    )
}

pub fn configure_health_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/test-db", get(test_db))
}
