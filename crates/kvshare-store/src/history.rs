//! # History Ledger
//!
//! Per-user upload history, kept as one JSON array under `history:<user>`,
//! newest entry first and capped at [`HISTORY_LIMIT`].
//!
//! Mutations read the list, change it in memory and write it back. Elements
//! are handled as plain JSON values: only the `id` field is interpreted, and
//! every other element and field is written back as it was read. A stored
//! value that is missing, unreadable, not JSON, or not an array is treated as
//! an empty list: the problem is logged and the request carries on, which
//! means the next write replaces the damaged value.
//!
//! There is no locking. Two concurrent mutations for the same user can each
//! read the same list and the later write wins, dropping the other change.

use std::sync::Arc;

use kvshare_core::{HistoryEntry, UserId};
use serde_json::Value;

use crate::error::StoreResult;
use crate::kv::KvStore;

/// Maximum entries kept per user.
pub const HISTORY_LIMIT: usize = 50;

/// Text returned for a user with no stored history.
const EMPTY_HISTORY: &str = "[]";

/// Store key holding `user`'s history.
pub fn history_key(user: &UserId) -> String {
    format!("history:{}", user.as_str())
}

fn entry_id(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

/// Reads and updates per-user history lists.
#[derive(Clone)]
pub struct HistoryLedger {
    store: Arc<dyn KvStore>,
}

impl HistoryLedger {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Prepend `entry`, trim to [`HISTORY_LIMIT`], persist, and return the
    /// new list.
    pub async fn append(&self, user: &UserId, entry: HistoryEntry) -> StoreResult<Vec<Value>> {
        let mut history = self.load(user).await;
        history.insert(0, serde_json::to_value(entry)?);
        history.truncate(HISTORY_LIMIT);
        self.save(user, &history).await?;
        Ok(history)
    }

    /// Drop every element whose `id` is `id`, persist, and return the new
    /// list. Elements without a string `id` are kept; an unknown id leaves
    /// the list as it was.
    pub async fn remove(&self, user: &UserId, id: &str) -> StoreResult<Vec<Value>> {
        let mut history = self.load(user).await;
        history.retain(|entry| entry_id(entry) != Some(id));
        self.save(user, &history).await?;
        Ok(history)
    }

    /// The stored JSON text, unparsed; `[]` when nothing (or an empty
    /// string) is stored.
    pub async fn read_raw(&self, user: &UserId) -> StoreResult<String> {
        Ok(self
            .store
            .get(&history_key(user))
            .await?
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| EMPTY_HISTORY.to_string()))
    }

    async fn load(&self, user: &UserId) -> Vec<Value> {
        let raw = match self.store.get(&history_key(user)).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(user = %user, error = %e, "failed to read history, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(history)) => history,
            Ok(_) => {
                tracing::warn!(user = %user, "stored history is not an array, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(user = %user, error = %e, "failed to parse history, starting empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, user: &UserId, history: &[Value]) -> StoreResult<()> {
        let encoded = serde_json::to_string(history)?;
        self.store.put(&history_key(user), encoded).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::memory::MemoryStore;
    use async_trait::async_trait;
    use chrono::Utc;

    fn entry(name: &str) -> HistoryEntry {
        HistoryEntry::for_upload(name, 5, Utc::now())
    }

    fn ledger() -> (MemoryStore, HistoryLedger) {
        let mem = MemoryStore::new();
        (mem.clone(), HistoryLedger::new(Arc::new(mem)))
    }

    fn user(id: &str) -> UserId {
        UserId::from_header(Some(id))
    }

    #[tokio::test]
    async fn append_prepends_newest_first() {
        let (_, ledger) = ledger();
        ledger.append(&user("u1"), entry("a.txt")).await.unwrap();
        let history = ledger.append(&user("u1"), entry("b.txt")).await.unwrap();
        let ids: Vec<&str> = history.iter().filter_map(entry_id).collect();
        assert_eq!(ids, ["b.txt", "a.txt"]);
    }

    #[tokio::test]
    async fn append_caps_at_limit() {
        let (mem, ledger) = ledger();
        let u = user("u1");
        for i in 0..(HISTORY_LIMIT + 7) {
            let history = ledger.append(&u, entry(&format!("f{i}.txt"))).await.unwrap();
            assert!(history.len() <= HISTORY_LIMIT);
            assert_eq!(history[0]["id"], format!("f{i}.txt"));
        }

        let stored: Vec<HistoryEntry> =
            serde_json::from_str(&mem.get("history:u1").await.unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), HISTORY_LIMIT);
        assert_eq!(stored[0].id, format!("f{}.txt", HISTORY_LIMIT + 6));
        assert_eq!(stored[HISTORY_LIMIT - 1].id, "f7.txt");
    }

    #[tokio::test]
    async fn histories_are_per_user() {
        let (_, ledger) = ledger();
        ledger.append(&user("u1"), entry("a.txt")).await.unwrap();
        ledger.append(&UserId::anonymous(), entry("b.txt")).await.unwrap();

        assert!(ledger.read_raw(&user("u1")).await.unwrap().contains("a.txt"));
        assert!(!ledger.read_raw(&user("u1")).await.unwrap().contains("b.txt"));
        assert!(ledger.read_raw(&user("anon")).await.unwrap().contains("b.txt"));
    }

    #[tokio::test]
    async fn remove_drops_matching_entries_only() {
        let (_, ledger) = ledger();
        let u = user("u1");
        ledger.append(&u, entry("a.txt")).await.unwrap();
        ledger.append(&u, entry("b.txt")).await.unwrap();
        ledger.append(&u, entry("a.txt")).await.unwrap();

        let history = ledger.remove(&u, "a.txt").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["id"], "b.txt");
    }

    #[tokio::test]
    async fn remove_unknown_id_is_a_no_op() {
        let (_, ledger) = ledger();
        let u = user("u1");
        let before = ledger.append(&u, entry("a.txt")).await.unwrap();
        let after = ledger.remove(&u, "nope.txt").await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn corrupt_history_is_replaced() {
        let (mem, ledger) = ledger();
        mem.put("history:u1", "{not json".into()).await.unwrap();

        let history = ledger.append(&user("u1"), entry("a.txt")).await.unwrap();
        assert_eq!(history.len(), 1);
        let raw = mem.get("history:u1").await.unwrap().unwrap();
        assert!(raw.starts_with('['));
    }

    #[tokio::test]
    async fn read_raw_returns_stored_text_verbatim() {
        let (mem, ledger) = ledger();
        assert_eq!(ledger.read_raw(&user("nobody")).await.unwrap(), "[]");

        mem.put("history:u1", "{not json".into()).await.unwrap();
        assert_eq!(ledger.read_raw(&user("u1")).await.unwrap(), "{not json");
    }

    /// Every read fails; writes go through.
    struct UnreadableStore(MemoryStore);

    #[async_trait]
    impl KvStore for UnreadableStore {
        async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Backend("read timeout".into()))
        }
        async fn put(&self, key: &str, value: String) -> StoreResult<()> {
            self.0.put(key, value).await
        }
        async fn delete(&self, key: &str) -> StoreResult<()> {
            self.0.delete(key).await
        }
        fn backend_name(&self) -> &'static str {
            "unreadable"
        }
    }

    #[tokio::test]
    async fn read_failure_is_swallowed_on_mutation_but_not_on_read_raw() {
        let mem = MemoryStore::new();
        let ledger = HistoryLedger::new(Arc::new(UnreadableStore(mem.clone())));
        let u = user("u1");

        let history = ledger.append(&u, entry("a.txt")).await.unwrap();
        assert_eq!(history.len(), 1);
        assert!(mem.contains("history:u1"));

        assert!(ledger.read_raw(&u).await.is_err());
    }

    #[tokio::test]
    async fn partial_entries_survive_mutation() {
        let (mem, ledger) = ledger();
        let u = user("u1");
        let full = serde_json::to_value(entry("b.txt")).unwrap();
        let stored = serde_json::json!([
            {"id": "a.txt", "name": "a.txt"},
            full,
            "not an object",
            {"name": "no-id.txt", "extra": 7}
        ]);
        mem.put("history:u1", stored.to_string()).await.unwrap();

        let history = ledger.remove(&u, "zzz").await.unwrap();
        assert_eq!(Value::Array(history), stored);
        let raw = mem.get("history:u1").await.unwrap().unwrap();
        assert_eq!(serde_json::from_str::<Value>(&raw).unwrap(), stored);

        let history = ledger.remove(&u, "a.txt").await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0]["id"], "b.txt");
        assert_eq!(history[2]["extra"], 7);

        let history = ledger.append(&u, entry("c.txt")).await.unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0]["id"], "c.txt");
        assert_eq!(history[0]["viewUrl"], "/view/c.txt");
        assert_eq!(history[2], "not an object");
    }

    #[tokio::test]
    async fn non_array_history_is_replaced() {
        let (mem, ledger) = ledger();
        mem.put("history:u1", r#"{"id":"a.txt"}"#.into()).await.unwrap();

        let history = ledger.append(&user("u1"), entry("b.txt")).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["id"], "b.txt");
    }

    #[tokio::test]
    async fn read_raw_treats_empty_value_as_empty_list() {
        let (mem, ledger) = ledger();
        mem.put("history:u1", String::new()).await.unwrap();
        assert_eq!(ledger.read_raw(&user("u1")).await.unwrap(), "[]");
    }
}
