//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The only persistent state is the key-value store. [`AppState`] wraps one
//! store handle in the two views the handlers need: file records and
//! per-user history.

use std::sync::Arc;

use kvshare_store::{FileRecordCodec, HistoryLedger, KvStore, MemoryStore};
use zeroize::Zeroizing;

/// Configured administrator login.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: Zeroizing<String>,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Administrator login. If `None`, every login attempt fails.
    pub admin: Option<AdminCredentials>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("admin", &self.admin)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            admin: None,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub records: FileRecordCodec,
    pub history: HistoryLedger,
    pub config: AppConfig,
    backend: &'static str,
}

impl AppState {
    /// Default configuration over a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), Arc::new(MemoryStore::new()))
    }

    /// State over the given store.
    pub fn with_config(config: AppConfig, store: Arc<dyn KvStore>) -> Self {
        Self {
            records: FileRecordCodec::new(Arc::clone(&store)),
            history: HistoryLedger::new(Arc::clone(&store)),
            backend: store.backend_name(),
            config,
        }
    }

    /// Name of the store backend, for logging.
    pub fn backend_name(&self) -> &'static str {
        self.backend
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
