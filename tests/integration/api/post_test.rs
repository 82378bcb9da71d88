//! Post, comment and like API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use social_media_api::backend::posts::types::{
    Comment, PostLike, UserPost, UserPostWithComments, UserPostWithLikes,
};

use crate::common::*;

async fn create_post(app: &TestApp, token: &str, body: &str) -> UserPost {
    let response = app
        .server
        .post("/post")
        .authorization_bearer(token)
        .json(&json!({ "body": body }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn like(app: &TestApp, token: &str, post_id: i64) {
    app.server
        .post("/like")
        .authorization_bearer(token)
        .json(&json!({ "post_id": post_id }))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_post() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;

    let post = create_post(&app, &user.token, "Test Post").await;

    assert_eq!(post.body, "Test Post");
    let me: serde_json::Value = app
        .server
        .get("/me")
        .authorization_bearer(&user.token)
        .await
        .json();
    assert_eq!(post.user_id, me["id"].as_i64().unwrap());
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/post")
        .json(&json!({ "body": "Test Post" }))
        .await;

    assert_unauthorized(&response, "Could not validate credentials");
}

#[tokio::test]
async fn test_create_post_rejects_blank_body() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;

    let response = app
        .server
        .post("/post")
        .authorization_bearer(&user.token)
        .json(&json!({ "body": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_post_missing_body_field() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;

    let response = app
        .server
        .post("/post")
        .authorization_bearer(&user.token)
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_all_posts_sorting() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;
    let first = create_post(&app, &user.token, "first").await;
    let second = create_post(&app, &user.token, "second").await;
    like(&app, &user.token, first.id).await;

    let ids = |posts: Vec<UserPostWithLikes>| posts.into_iter().map(|p| p.id).collect::<Vec<_>>();

    let default: Vec<UserPostWithLikes> = app.server.get("/post").await.json();
    assert_eq!(ids(default), vec![second.id, first.id]);

    let old: Vec<UserPostWithLikes> = app
        .server
        .get("/post")
        .add_query_param("sorting", "old")
        .await
        .json();
    assert_eq!(ids(old), vec![first.id, second.id]);

    let liked: Vec<UserPostWithLikes> = app
        .server
        .get("/post")
        .add_query_param("sorting", "most_likes")
        .await
        .json();
    assert_eq!(liked[0].id, first.id);
    assert_eq!(liked[0].likes, 1);
    assert_eq!(liked[1].likes, 0);
}

#[tokio::test]
async fn test_get_all_posts_unknown_sorting() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/post")
        .add_query_param("sorting", "popular")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_comment() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;
    let post = create_post(&app, &user.token, "Test Post").await;

    let response = app
        .server
        .post("/comment")
        .authorization_bearer(&user.token)
        .json(&json!({ "body": "Test Comment", "post_id": post.id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let comment: Comment = response.json();
    assert_eq!(comment.body, "Test Comment");
    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.user_id, post.user_id);
}

#[tokio::test]
async fn test_create_comment_missing_post() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;

    let response = app
        .server
        .post("/comment")
        .authorization_bearer(&user.token)
        .json(&json!({ "body": "Test Comment", "post_id": 2 }))
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_get_comments_on_post() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;
    let post = create_post(&app, &user.token, "Test Post").await;
    app.server
        .post("/comment")
        .authorization_bearer(&user.token)
        .json(&json!({ "body": "Test Comment", "post_id": post.id }))
        .await
        .assert_status(StatusCode::CREATED);

    let comments: Vec<Comment> = app
        .server
        .get(&format!("/post/{}/comment", post.id))
        .await
        .json();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].body, "Test Comment");
}

#[tokio::test]
async fn test_get_comments_on_post_empty() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;
    let post = create_post(&app, &user.token, "Test Post").await;

    let comments: Vec<Comment> = app
        .server
        .get(&format!("/post/{}/comment", post.id))
        .await
        .json();

    assert!(comments.is_empty());
}

#[tokio::test]
async fn test_get_post_with_comments() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;
    let post = create_post(&app, &user.token, "Test Post").await;
    like(&app, &user.token, post.id).await;
    app.server
        .post("/comment")
        .authorization_bearer(&user.token)
        .json(&json!({ "body": "Test Comment", "post_id": post.id }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = app.server.get(&format!("/post/{}", post.id)).await;

    response.assert_status_ok();
    let body: UserPostWithComments = response.json();
    assert_eq!(body.post.id, post.id);
    assert_eq!(body.post.likes, 1);
    assert_eq!(body.comments.len(), 1);
}

#[tokio::test]
async fn test_get_missing_post_with_comments() {
    let app = TestApp::new().await;

    let response = app.server.get("/post/2").await;

    assert_error(&response, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_like_post() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;
    let post = create_post(&app, &user.token, "Test Post").await;

    let response = app
        .server
        .post("/like")
        .authorization_bearer(&user.token)
        .json(&json!({ "post_id": post.id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let like: PostLike = response.json();
    assert_eq!(like.post_id, post.id);
}

#[tokio::test]
async fn test_like_missing_post() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "poster@example.net").await;

    let response = app
        .server
        .post("/like")
        .authorization_bearer(&user.token)
        .json(&json!({ "post_id": 42 }))
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "Post not found");
}
