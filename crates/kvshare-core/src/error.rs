//! # Validation Errors
//!
//! Rejections produced by the upload validator. The `Display` text of each
//! variant is the user-facing message returned in the JSON `error` field, so
//! wording changes here are API changes.

use thiserror::Error;

/// Why an upload was refused. Nothing is persisted when one of these is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The multipart body carried no `file` field with a filename.
    #[error("no file selected")]
    MissingFile,

    /// The file is larger than the upload ceiling.
    #[error("file too large; maximum supported size is {limit}")]
    TooLarge {
        /// The ceiling, already formatted for display (e.g. `25 MB`).
        limit: String,
    },

    /// The extension is not in the allow-list.
    #[error("unsupported file type; supported formats: {supported}")]
    UnsupportedType {
        /// Comma-separated allow-list.
        supported: String,
    },
}
