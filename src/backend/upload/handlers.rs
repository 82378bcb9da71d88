/**
 * Upload Handler
 *
 * `POST /upload` takes a multipart form with a `file` field. The field is
 * streamed to disk chunk by chunk, never buffered whole. Data goes to a
 * `.part` file which is renamed once the last chunk is written, so a failed
 * upload never leaves a servable file behind.
 */

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::upload::UPLOADS_PREFIX;
use crate::shared::AppConfig;

const FILE_FIELD: &str = "file";
const UPLOAD_FAILED_MESSAGE: &str = "There was an error uploading the file.";

#[derive(Serialize, Deserialize, Debug)]
pub struct UploadResponse {
    pub detail: String,
    pub file_url: String,
    /// Bytes written
    pub size: u64,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no `file` field in form")]
    MissingFile,

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("could not store upload: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let err = match self {
            UploadError::MissingFile => {
                BackendError::handler(StatusCode::BAD_REQUEST, "Missing file field")
            }
            UploadError::Multipart(e) => {
                tracing::warn!("Malformed upload: {}", e);
                BackendError::handler(e.status(), e.body_text())
            }
            UploadError::Io(e) => {
                tracing::error!("Error uploading file: {}", e);
                BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, UPLOAD_FAILED_MESSAGE)
            }
        };
        err.into_response()
    }
}

/// Upload handler
///
/// # Errors
///
/// * `400 Bad Request` - No `file` field, or a malformed form
/// * `401 Unauthorized` - Missing or invalid bearer token
/// * `413 Payload Too Large` - Body exceeds the configured upload limit
/// * `500 Internal Server Error` - The file could not be written
pub async fn upload_file(
    State(config): State<Arc<AppConfig>>,
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), UploadError> {
    while let Some(mut field) = multipart.next_field().await.map_err(UploadError::from)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original = field.file_name().unwrap_or("upload").to_string();
        let stored_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(&original));
        let final_path = config.upload_dir.join(&stored_name);
        let part_path = config.upload_dir.join(format!("{stored_name}.part"));
        tracing::info!(user_id = user.id, "Saving upload {} to {}", original, part_path.display());

        let mut file = tokio::fs::File::create(&part_path)
            .await
            .map_err(UploadError::from)?;
        let mut size: u64 = 0;

        let written: Result<(), UploadError> = async {
            while let Some(chunk) = field.chunk().await? {
                file.write_all(&chunk).await?;
                size += chunk.len() as u64;
            }
            file.flush().await?;
            Ok(())
        }
        .await;

        if let Err(e) = written {
            drop(file);
            discard(&part_path).await;
            return Err(e);
        }
        drop(file);

        if let Err(e) = tokio::fs::rename(&part_path, &final_path).await {
            discard(&part_path).await;
            return Err(e.into());
        }

        tracing::info!(user_id = user.id, size, "Upload stored as {}", stored_name);
        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                detail: "Upload successful".to_string(),
                file_url: format!("{UPLOADS_PREFIX}/{stored_name}"),
                size,
            }),
        ));
    }

    Err(UploadError::MissingFile)
}

async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!("Could not remove partial upload {}: {}", path.display(), e);
    }
}

/// Reduce a client-supplied file name to a safe single path component
///
/// Directory parts are dropped and anything outside `[A-Za-z0-9._-]` becomes
/// `_`. Names that end up empty or dot-only become `upload`.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.chars().all(|c| c == '.') {
        "upload".to_string()
    } else {
        cleaned
    }
}
