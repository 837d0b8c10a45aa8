//! # Records
//!
//! [`FileRecord`] is the logical file the codec splits across three store
//! entries. [`HistoryEntry`] is one row of a user's upload history, stored
//! as part of a JSON array and returned to clients verbatim, hence the
//! camelCase field names.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::size::format_size;

/// A stored file. The name doubles as its identifier: uploading the same
/// name again replaces the previous record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Original filename as uploaded.
    pub name: String,
    /// File content as text.
    pub content: String,
    /// MIME type served on view and download.
    pub mime_type: String,
}

/// One upload in a user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Identifier used by delete; always the filename.
    pub id: String,
    /// Filename.
    pub name: String,
    /// Human-readable size, e.g. `12 KB`.
    pub size: String,
    /// Upload time, ISO-8601 UTC with millisecond precision.
    pub time: String,
    /// Relative URL serving the content inline.
    pub view_url: String,
    /// Relative URL serving the content as an attachment.
    pub download_url: String,
}

impl HistoryEntry {
    /// Build the entry for a file just uploaded.
    pub fn for_upload(name: &str, size_bytes: u64, at: DateTime<Utc>) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            size: format_size(size_bytes),
            time: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            view_url: view_url(name),
            download_url: download_url(name),
        }
    }
}

/// Relative view URL for a filename. The name is embedded unencoded.
pub fn view_url(name: &str) -> String {
    format!("/view/{name}")
}

/// Relative download URL for a filename. The name is embedded unencoded.
pub fn download_url(name: &str) -> String {
    format!("/download/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn upload_entry_fields() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap();
        let entry = HistoryEntry::for_upload("notes.txt", 5, at);
        assert_eq!(entry.id, "notes.txt");
        assert_eq!(entry.name, "notes.txt");
        assert_eq!(entry.size, "5 bytes");
        assert_eq!(entry.time, "2026-10-16T08:30:00.000Z");
        assert_eq!(entry.view_url, "/view/notes.txt");
        assert_eq!(entry.download_url, "/download/notes.txt");
    }

    #[test]
    fn serializes_with_camel_case_urls() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let json = serde_json::to_value(HistoryEntry::for_upload("a.json", 2048, at)).unwrap();
        assert_eq!(json["viewUrl"], "/view/a.json");
        assert_eq!(json["downloadUrl"], "/download/a.json");
        assert_eq!(json["size"], "2 KB");
        assert!(json.get("view_url").is_none());
    }

    #[test]
    fn unknown_fields_are_ignored_on_read() {
        let raw = r#"{"id":"a","name":"a","size":"1 bytes","time":"t",
                     "viewUrl":"/view/a","downloadUrl":"/download/a","extra":1}"#;
        let entry: HistoryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.id, "a");
    }
}
