//! Handler for bulk record import from an uploaded CSV or TXT file.

use std::path::Path;

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use intake_core::import::{parse_import, ImportFormat};
use intake_core::record::Record;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for a successful import.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    /// Name the upload was stored under (`{millis}-{original}`).
    pub filename: String,
    /// Records parsed from the file, exactly as appended to the store.
    pub data: Vec<Record>,
}

/// POST /api/upload
///
/// Accepts a multipart form with a required `file` field. The file is kept
/// in the upload directory, parsed by extension, and every parsed record is
/// appended to the store without validation.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((filename, data));
    }

    let (original, data) =
        upload.ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;
    let original = base_name(&original);

    let format = ImportFormat::from_filename(&original)?;

    let stored_name = format!("{}-{original}", chrono::Utc::now().timestamp_millis());
    let upload_dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::FileProcessing(format!("Failed to create upload dir: {e}")))?;
    tokio::fs::write(upload_dir.join(&stored_name), &data)
        .await
        .map_err(|e| AppError::FileProcessing(format!("Failed to store upload: {e}")))?;

    let records = parse_import(format, &data, &state.ids)?;
    state.store.append_all(records.clone()).await?;

    tracing::info!(
        filename = %stored_name,
        ?format,
        count = records.len(),
        "File imported"
    );

    Ok(Json(UploadResponse {
        message: format.success_message(),
        filename: stored_name,
        data: records,
    }))
}

/// Strip any client-supplied directory components from a file name.
fn base_name(filename: &str) -> String {
    let last = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    Path::new(last)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
