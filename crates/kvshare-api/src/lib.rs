//! # kvshare-api — HTTP Service
//!
//! Axum application serving the upload page and the file-sharing API on top
//! of `kvshare-store`.
//!
//! ## API Surface
//!
//! | Path | Method | Guard | Module |
//! |---|---|---|---|
//! | `/`, `/index.html` | GET | none | [`routes::page`] |
//! | `/admin-login` | POST | none | [`routes::session`] |
//! | `/upload` | POST | admin cookie | [`routes::files`] |
//! | `/delete` | POST | admin cookie | [`routes::files`] |
//! | `/history` | GET | none | [`routes::history`] |
//! | `/view/{id}` | GET | none | [`routes::files`] |
//! | `/download/{id}` | GET | none | [`routes::files`] |
//!
//! Any other path, or a known path with the wrong method, is a plain-text
//! 404.
//!
//! ## Middleware Stack (outermost first)
//!
//! ```text
//! TraceLayer → CatchPanic → 405-to-404 rewrite → Handler
//! ```
//!
//! The service holds no in-process state besides the store handle, so any
//! number of instances can share one store.

pub mod auth;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;

pub use error::AppError;
pub use state::{AdminCredentials, AppConfig, AppState};

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::page::router())
        .merge(routes::session::router())
        .merge(routes::files::router())
        .merge(routes::history::router())
        .fallback(routes::fallback)
        .layer(from_fn(middleware::method_fallback::method_not_allowed_as_not_found))
        .layer(middleware::catch_panic::layer())
        .layer(middleware::tracing_layer::layer())
        .with_state(state)
}
