//! # File Routes
//!
//! Upload, delete, view and download.
//!
//! ## Upload
//!
//! `POST /upload` (admin cookie) takes a multipart form whose `file` field
//! carries the file. Checks run in this order: a file is present, it is no
//! larger than 25 MiB, its extension is allowed. The bytes are stored as
//! text (invalid UTF-8 is replaced), then a history entry is prepended for
//! the caller.
//!
//! The route raises the request body limit just above the file ceiling, so
//! the validator decides exactly-at-limit uploads and the multipart reader
//! only cuts off bodies that are clearly oversized.
//!
//! ## View / Download
//!
//! Both serve the stored content with its stored MIME type and a one-year
//! public cache lifetime. Download adds an attachment disposition carrying
//! the original filename.

use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use kvshare_core::{
    format_size, validate_upload, FileRecord, HistoryEntry, ValidationError, MAX_UPLOAD_BYTES,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::AdminSession;
use crate::error::AppError;
use crate::extractors::{extract_json, Identity};
use crate::state::AppState;

/// `Cache-Control` on view and download responses.
pub const CACHE_CONTROL_VALUE: &str = "public, max-age=31536000";

/// Allowance for multipart framing on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// Successful upload response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub view_url: String,
    pub download_url: String,
    pub history: Vec<Value>,
}

/// Delete request body.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}

/// Delete response.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub history: Vec<Value>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(upload).layer(DefaultBodyLimit::max(
                MAX_UPLOAD_BYTES as usize + MULTIPART_OVERHEAD,
            )),
        )
        .route("/delete", post(delete))
        .route("/view/*id", get(view))
        .route("/download/*id", get(download))
}

struct UploadedFile {
    name: String,
    bytes: Bytes,
}

/// First `file` field of the form. `None` when there is no such field or it
/// has no filename.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(name) = field.file_name().map(str::to_string) else {
            return Ok(None);
        };
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok(Some(UploadedFile { name, bytes }));
    }
    Ok(None)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Validation(ValidationError::TooLarge {
            limit: format_size(MAX_UPLOAD_BYTES),
        })
    } else {
        AppError::UploadFailed(err.body_text())
    }
}

async fn upload(
    _admin: AdminSession,
    Identity(user): Identity,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::UploadFailed(e.body_text()))?;
    let file = read_file_field(&mut multipart)
        .await?
        .ok_or(ValidationError::MissingFile)?;

    let size = file.bytes.len() as u64;
    let mime_type = validate_upload(&file.name, size)?;

    let record = FileRecord {
        name: file.name,
        content: String::from_utf8_lossy(&file.bytes).into_owned(),
        mime_type: mime_type.to_string(),
    };
    state
        .records
        .store(&record)
        .await
        .map_err(|e| AppError::UploadFailed(e.to_string()))?;

    let entry = HistoryEntry::for_upload(&record.name, size, Utc::now());
    let history = state
        .history
        .append(&user, entry.clone())
        .await
        .map_err(|e| AppError::UploadFailed(e.to_string()))?;

    tracing::info!(
        user = %user,
        file = %record.name,
        size,
        backend = state.backend_name(),
        "file uploaded"
    );

    Ok(Json(UploadResponse {
        success: true,
        view_url: entry.view_url,
        download_url: entry.download_url,
        history,
    }))
}

async fn delete(
    _admin: AdminSession,
    Identity(user): Identity,
    State(state): State<AppState>,
    body: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let req = extract_json(body)?;

    let history = state.history.remove(&user, &req.id).await?;
    state.records.erase(&req.id).await?;

    tracing::info!(user = %user, file = %req.id, "file deleted");
    Ok(Json(DeleteResponse {
        success: true,
        history,
    }))
}

async fn load_record(state: &AppState, id: &str) -> Result<FileRecord, AppError> {
    state
        .records
        .load(id)
        .await
        .map_err(|e| AppError::FetchFailed(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("file not found".into()))
}

async fn view(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, AppError> {
    let record = load_record(&state, &id).await?;
    let headers = [
        (header::CONTENT_TYPE, record.mime_type),
        (header::CACHE_CONTROL, CACHE_CONTROL_VALUE.to_string()),
    ];
    Ok((headers, record.content).into_response())
}

async fn download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = load_record(&state, &id).await?;
    let disposition = format!(
        "attachment; filename*=UTF-8''{}",
        urlencoding::encode(&record.name)
    );
    let headers = [
        (header::CONTENT_TYPE, record.mime_type),
        (header::CONTENT_DISPOSITION, disposition),
        (header::CACHE_CONTROL, CACHE_CONTROL_VALUE.to_string()),
    ];
    Ok((headers, record.content).into_response())
}
