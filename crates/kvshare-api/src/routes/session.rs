//! # Admin Login
//!
//! `POST /admin-login` checks a username/password pair against the
//! configured administrator and, on success, sets the admin cookie.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::auth::{verify_credentials, ADMIN_SET_COOKIE};
use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Login request body. Missing fields count as empty strings.
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/admin-login", post(admin_login))
}

async fn admin_login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let req = extract_json(body)?;

    if verify_credentials(state.config.admin.as_ref(), &req.username, &req.password) {
        tracing::info!("admin login succeeded");
        let body = LoginResponse {
            success: true,
            message: "login successful".into(),
            is_admin: Some(true),
        };
        return Ok(([(header::SET_COOKIE, ADMIN_SET_COOKIE)], Json(body)).into_response());
    }

    tracing::warn!("admin login rejected");
    let body = LoginResponse {
        success: false,
        message: "invalid username or password".into(),
        is_admin: None,
    };
    Ok((StatusCode::UNAUTHORIZED, Json(body)).into_response())
}
