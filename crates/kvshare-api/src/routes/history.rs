//! `GET /history`: the caller's stored history list, returned as stored.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::extractors::Identity;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/history", get(history))
}

async fn history(
    Identity(user): Identity,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let raw = state.history.read_raw(&user).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], raw).into_response())
}
