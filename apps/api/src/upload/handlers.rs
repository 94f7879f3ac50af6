//! Axum route handlers for the upload page.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::parser::ParsedFields;
use crate::state::AppState;
use crate::upload::{allowed_file, storage::save_upload};

const UPLOAD_PAGE: &str = include_str!("../../templates/upload.html");

/// GET /upload
pub async fn handle_upload_page() -> Html<&'static str> {
    Html(UPLOAD_PAGE)
}

/// POST /upload
/// Accepts a multipart `file` part holding a PDF and returns the parsed fields.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedFields>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| AppError::Validation("No file part".into()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No selected file".into()));
    }
    if !allowed_file(&filename) {
        return Err(AppError::Validation("File type not allowed".into()));
    }

    let path = save_upload(&state.config.upload_dir, &filename, &data).await?;

    // PDF decoding and the extractors are CPU-bound and synchronous.
    let parser = state.parser.clone();
    let fields = tokio::task::spawn_blocking(move || parser.parse_resume(&path))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    info!(filename = %filename, "resume upload parsed");
    Ok(Json(fields))
}
