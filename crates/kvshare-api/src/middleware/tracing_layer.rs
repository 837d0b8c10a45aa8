//! # Request/Response Tracing
//!
//! Configures `tower_http::trace::TraceLayer` for structured request
//! logging with tracing spans.

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the request `TraceLayer`.
///
/// Each request gets a span with method and URI; completed responses are
/// logged at INFO with status and latency, and 5xx responses are recorded
/// as failures.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http().on_response(DefaultOnResponse::new().level(Level::INFO))
}
