//! # Middleware Modules
//!
//! Tower middleware layers for the API service.

pub mod catch_panic;
pub mod method_fallback;
pub mod tracing_layer;
