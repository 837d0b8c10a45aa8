//! Upload page, served from a document compiled into the binary.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
}

async fn index() -> Response {
    ([(header::CONTENT_TYPE, "text/html;charset=utf-8")], INDEX_HTML).into_response()
}
