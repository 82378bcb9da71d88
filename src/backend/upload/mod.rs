//! Upload Module
//!
//! Stores files sent to `POST /upload` in the configured upload directory.
//! Stored files are served back under `/uploads/`.

pub mod handlers;

use std::path::Path;

pub use handlers::{sanitize_file_name, upload_file, UploadError, UploadResponse};

/// URL prefix stored files are served under
pub const UPLOADS_PREFIX: &str = "/uploads";

/// Create the upload directory if it does not exist yet
pub async fn ensure_upload_dir(dir: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    tracing::debug!("Upload directory ready at {}", dir.display());
    Ok(())
}
