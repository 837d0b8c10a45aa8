//! The key-value store seam.

use async_trait::async_trait;

use crate::error::StoreResult;

/// Opaque string-keyed store with get/put/delete.
///
/// Implementations need not be strongly consistent: a read after a write
/// from another request may return the old value. Deleting an absent key
/// succeeds.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch a value, `None` when the key is absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store a value, replacing any previous one.
    async fn put(&self, key: &str, value: String) -> StoreResult<()>;

    /// Remove a key. Absent keys are not an error.
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}
