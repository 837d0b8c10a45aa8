//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//!
//! Errors raised by the JSON endpoints (`/admin-login`, `/upload`,
//! `/delete`) answer with an `{"error": "..."}` body. Errors on the content
//! endpoints answer with plain text, matching what a browser expects when it
//! follows a view or download link. Store failures are logged with their
//! detail; the client sees a fixed message.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use kvshare_core::ValidationError;
use kvshare_store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Content type of every plain-text response.
pub const PLAIN_TEXT: &str = "text/plain;charset=utf-8";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed request (400, JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Upload rejected by a validation rule (400, JSON).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Missing admin cookie (401, JSON).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found (404, plain text).
    #[error("not found: {0}")]
    NotFound(String),

    /// Upload could not be read or stored (500, JSON).
    #[error("upload failed: {0}")]
    UploadFailed(String),

    /// Stored file could not be read (500, plain text).
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// Anything else (500, plain text). The detail is logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UploadFailed(_) | Self::FetchFailed(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// A plain-text response.
pub fn plain_text(status: StatusCode, body: impl Into<String>) -> Response {
    (status, [(header::CONTENT_TYPE, PLAIN_TEXT)], body.into()).into_response()
}

fn json_error(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::BadRequest(message) | Self::Unauthorized(message) => json_error(status, message),
            Self::Validation(err) => json_error(status, err.to_string()),
            Self::NotFound(message) => plain_text(status, message),
            Self::UploadFailed(detail) => {
                tracing::error!(error = %detail, "upload failed");
                json_error(status, format!("upload failed: {detail}"))
            }
            Self::FetchFailed(detail) => {
                tracing::error!(error = %detail, "failed to fetch file");
                plain_text(status, "failed to fetch file")
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                plain_text(status, "server error")
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn response_parts(err: AppError) -> (StatusCode, Option<String>, String) {
        let response = err.into_response();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn status_codes() {
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation(ValidationError::MissingFile).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Unauthorized("x".into()).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::UploadFailed("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::FetchFailed("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn validation_error_is_json() {
        let (status, content_type, body) =
            response_parts(AppError::Validation(ValidationError::MissingFile)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let parsed: ErrorBody = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.error, "no file selected");
    }

    #[tokio::test]
    async fn unauthorized_is_json() {
        let (status, _, body) =
            response_parts(AppError::Unauthorized("please log in first".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"error":"please log in first"}"#);
    }

    #[tokio::test]
    async fn upload_failed_prefixes_detail() {
        let (status, _, body) = response_parts(AppError::UploadFailed("disk full".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let parsed: ErrorBody = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.error, "upload failed: disk full");
    }

    #[tokio::test]
    async fn not_found_is_plain_text() {
        let (status, content_type, body) =
            response_parts(AppError::NotFound("file not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some(PLAIN_TEXT));
        assert_eq!(body, "file not found");
    }

    #[tokio::test]
    async fn fetch_failure_hides_detail() {
        let (status, _, body) =
            response_parts(AppError::FetchFailed("connection reset".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "failed to fetch file");
    }

    #[tokio::test]
    async fn internal_error_hides_detail() {
        let (_, _, body) = response_parts(AppError::from(StoreError::Backend(
            "secret path /var/lib".into(),
        )))
        .await;
        assert_eq!(body, "server error");
    }
}
