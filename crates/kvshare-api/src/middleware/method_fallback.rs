//! Known path, wrong method: answer like an unknown path.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use crate::routes::page_not_found;

/// Replace any 405 from the router with the plain-text 404.
pub async fn method_not_allowed_as_not_found(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return page_not_found();
    }
    response
}
