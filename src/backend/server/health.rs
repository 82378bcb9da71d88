//! Database health check

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::DetailResponse;
use crate::backend::error::BackendError;

/// GET /test-db
///
/// Runs `SELECT 1` against the pool. A failure is reported as 500.
pub async fn test_db(State(pool): State<SqlitePool>) -> Result<Json<DetailResponse>, BackendError> {
    let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
    tracing::debug!(result = one, "Database health check");
    Ok(Json(DetailResponse::new("Database connection OK")))
}
