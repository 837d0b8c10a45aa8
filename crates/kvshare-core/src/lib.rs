#![deny(missing_docs)]

//! # kvshare-core — Domain Types for the kvshare File Drop
//!
//! Everything in this crate is pure: no I/O, no async. Storage lives in
//! `kvshare-store` and HTTP in `kvshare-api`; both depend on the types here.
//!
//! ## Contents
//!
//! - [`upload`] — the upload validator: allowed extensions, the extension to
//!   MIME table, and the 25 MiB ceiling.
//! - [`size`] — human-readable byte counts for messages and history entries.
//! - [`record`] — [`FileRecord`] (what gets stored) and [`HistoryEntry`]
//!   (what gets listed).
//! - [`identity`] — [`UserId`], the history namespace taken from `X-User-ID`.
//! - [`error`] — [`ValidationError`].

pub mod error;
pub mod identity;
pub mod record;
pub mod size;
pub mod upload;

pub use error::ValidationError;
pub use identity::UserId;
pub use record::{FileRecord, HistoryEntry};
pub use size::format_size;
pub use upload::{
    file_extension, mime_type_for, validate_upload, ALLOWED_EXTENSIONS, FALLBACK_MIME_TYPE,
    MAX_UPLOAD_BYTES,
};
