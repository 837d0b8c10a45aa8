//! # kvshare-store — Key-Value Persistence
//!
//! The service keeps everything in a flat string-keyed store. This crate
//! defines that seam and the two structures layered on it.
//!
//! ## Key layout
//!
//! | Key | Value |
//! |---|---|
//! | `<enc(name)>:content` | file text |
//! | `<enc(name)>:type` | MIME type |
//! | `<enc(name)>:name` | original filename |
//! | `history:<user>` | JSON array of history entries, newest first |
//!
//! `enc` is URL component encoding. The three file entries are written one
//! after another with no transaction, so a reader can briefly observe a
//! partial record; presence is decided by the `:content` entry alone.
//!
//! ## Consistency
//!
//! Backends are assumed eventually consistent. History updates are
//! read-modify-write with no locking: two concurrent writers for the same
//! user can lose one update. This is an accepted limitation.

pub mod error;
pub mod filesystem;
pub mod history;
pub mod kv;
pub mod memory;
pub mod records;

pub use error::{StoreError, StoreResult};
pub use filesystem::FsStore;
pub use history::{HistoryLedger, HISTORY_LIMIT};
pub use kv::KvStore;
pub use memory::MemoryStore;
pub use records::FileRecordCodec;
