//! # Route Modules
//!
//! Each module exposes a `router()` returning `Router<AppState>`; they are
//! merged in [`crate::app`].

pub mod files;
pub mod history;
pub mod page;
pub mod session;

use axum::http::StatusCode;
use axum::response::Response;

use crate::error::plain_text;

/// Response for any unrouted request.
pub fn page_not_found() -> Response {
    plain_text(StatusCode::NOT_FOUND, "page not found")
}

/// Router fallback.
pub async fn fallback() -> Response {
    page_not_found()
}
