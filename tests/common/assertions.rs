//! Response assertions shared by the API tests

use axum::http::{header::WWW_AUTHENTICATE, StatusCode};
use axum_test::TestResponse;
use pretty_assertions::assert_eq;
use serde_json::Value;

/// Assert the status and the `detail` of an error body
pub fn assert_error(response: &TestResponse, status: StatusCode, detail: &str) {
    assert_eq!(response.status_code(), status);
    let body: Value = response.json();
    assert_eq!(body["detail"], detail, "unexpected body: {body}");
    assert_eq!(body["status"], status.as_u16());
}

/// Assert a 401 carrying the bearer challenge
pub fn assert_unauthorized(response: &TestResponse, detail: &str) {
    assert_error(response, StatusCode::UNAUTHORIZED, detail);
    assert_eq!(
        response.header(WWW_AUTHENTICATE).to_str().unwrap(),
        "Bearer"
    );
}
