//! # Custom Extractors
//!
//! Caller identity from the `x-user-id` header, and a helper mapping JSON
//! body rejections to [`AppError::BadRequest`].

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::http::request::Parts;
use axum::Json;
use kvshare_core::UserId;

use crate::error::AppError;

/// Header naming the caller whose history a request reads or changes.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity. Missing or empty header means anonymous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub UserId);

#[axum::async_trait]
impl<S: Send + Sync> axum::extract::FromRequestParts<S> for Identity {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
        Ok(Identity(UserId::from_header(raw.as_deref())))
    }
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
