//! # Admin Session
//!
//! A successful `POST /admin-login` sets the cookie `isAdmin=true`. Mutating
//! endpoints take an [`AdminSession`] extractor, which accepts the request
//! when any `Cookie` header contains that marker and otherwise rejects it
//! with 401 before the body is read.
//!
//! The cookie is not signed: it proves only that the client chose to send
//! it. Credential checks compare in constant time.

use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AdminCredentials;

/// Substring of the `Cookie` header that marks an admin session.
pub const ADMIN_COOKIE_MARKER: &str = "isAdmin=true";

/// `Set-Cookie` value issued on successful login.
pub const ADMIN_SET_COOKIE: &str = "isAdmin=true; Path=/; HttpOnly; Secure; SameSite=Strict";

/// Whether the request carries the admin cookie.
pub fn has_admin_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .any(|value| String::from_utf8_lossy(value.as_bytes()).contains(ADMIN_COOKIE_MARKER))
}

/// Proof that the request carried the admin cookie.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

#[axum::async_trait]
impl<S: Send + Sync> axum::extract::FromRequestParts<S> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if has_admin_cookie(&parts.headers) {
            Ok(AdminSession)
        } else {
            tracing::warn!(path = %parts.uri.path(), "rejected request without admin cookie");
            Err(AppError::Unauthorized("please log in first".into()))
        }
    }
}

/// Constant-time string comparison.
///
/// When lengths differ, performs a dummy comparison so the mismatch costs
/// about the same as a full one.
fn constant_time_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Check a login attempt. Always false when no credentials are configured.
pub fn verify_credentials(
    admin: Option<&AdminCredentials>,
    username: &str,
    password: &str,
) -> bool {
    let Some(admin) = admin else {
        return false;
    };
    let username_ok = constant_time_eq(username, &admin.username);
    let password_ok = constant_time_eq(password, admin.password.as_str());
    username_ok & password_ok
}
