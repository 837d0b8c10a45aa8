//! # File Record Codec
//!
//! Splits a [`FileRecord`] into three store entries sharing one key prefix
//! and reassembles it on read.
//!
//! The prefix is the URL component encoding of the filename, and the same
//! encoding is applied on store, load and erase. Names are otherwise taken as
//! given: two uploads with the same name overwrite each other.

use std::sync::Arc;

use kvshare_core::{FileRecord, FALLBACK_MIME_TYPE};

use crate::error::StoreResult;
use crate::kv::KvStore;

/// The three entries making up one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Content,
    MimeType,
    Name,
}

impl RecordField {
    pub const ALL: [RecordField; 3] = [Self::Content, Self::MimeType, Self::Name];

    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::MimeType => "type",
            Self::Name => "name",
        }
    }
}

/// Store key for one field of the record named `name`.
pub fn record_key(name: &str, field: RecordField) -> String {
    format!("{}:{}", urlencoding::encode(name), field.suffix())
}

/// Reads and writes file records.
#[derive(Clone)]
pub struct FileRecordCodec {
    store: Arc<dyn KvStore>,
}

impl FileRecordCodec {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Write content, type and name, in that order.
    pub async fn store(&self, record: &FileRecord) -> StoreResult<()> {
        let name = record.name.as_str();
        self.store
            .put(&record_key(name, RecordField::Content), record.content.clone())
            .await?;
        self.store
            .put(&record_key(name, RecordField::MimeType), record.mime_type.clone())
            .await?;
        self.store
            .put(&record_key(name, RecordField::Name), record.name.clone())
            .await?;
        tracing::debug!(file = %name, backend = self.store.backend_name(), "file record stored");
        Ok(())
    }

    /// Load a record. `None` when the content entry is absent, whatever
    /// state the other two entries are in.
    pub async fn load(&self, name: &str) -> StoreResult<Option<FileRecord>> {
        let Some(content) = self.store.get(&record_key(name, RecordField::Content)).await? else {
            return Ok(None);
        };
        let mime_type = self
            .store
            .get(&record_key(name, RecordField::MimeType))
            .await?
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string());
        let stored_name = self
            .store
            .get(&record_key(name, RecordField::Name))
            .await?
            .unwrap_or_else(|| name.to_string());

        Ok(Some(FileRecord {
            name: stored_name,
            content,
            mime_type,
        }))
    }

    /// Delete all three entries.
    ///
    /// Every delete is attempted even if an earlier one fails; the first
    /// failure is returned.
    pub async fn erase(&self, name: &str) -> StoreResult<()> {
        let mut first_err = None;
        for field in RecordField::ALL {
            let key = record_key(name, field);
            if let Err(e) = self.store.delete(&key).await {
                tracing::warn!(key = %key, error = %e, "failed to delete file record entry");
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
