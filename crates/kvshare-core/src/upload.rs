//! # Upload Validator
//!
//! Decides whether a file may be stored, and under which MIME type.
//!
//! ## Rules
//!
//! - The extension is the lowercase text after the final `.`. A name with no
//!   `.` uses the whole lowercased name as its "extension", which never
//!   matches the allow-list, so extensionless files are rejected.
//! - The size must be at most [`MAX_UPLOAD_BYTES`] (inclusive).
//! - Size is checked before type, so an oversized file with a bad extension
//!   reports the size problem.

use crate::error::ValidationError;
use crate::size::format_size;

/// Largest accepted upload, in bytes (25 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

/// MIME type served when a stored record has no type entry.
pub const FALLBACK_MIME_TYPE: &str = "text/plain";

/// Accepted extensions, in the order they are listed to users.
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["txt", "yaml", "yml", "json", "js", "conf"];

/// Lowercased text after the final `.`, or the whole lowercased name when
/// there is no `.`.
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// MIME type for an accepted filename, `None` if the extension is not
/// allowed.
pub fn mime_type_for(name: &str) -> Option<&'static str> {
    match file_extension(name).as_str() {
        "txt" | "yaml" | "yml" | "conf" => Some("text/plain"),
        "json" => Some("application/json"),
        "js" => Some("text/javascript"),
        _ => None,
    }
}

/// Validate an upload by filename and byte length.
///
/// Returns the MIME type to store alongside the content.
pub fn validate_upload(name: &str, len: u64) -> Result<&'static str, ValidationError> {
    if len > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge {
            limit: format_size(MAX_UPLOAD_BYTES),
        });
    }
    mime_type_for(name).ok_or_else(|| ValidationError::UnsupportedType {
        supported: ALLOWED_EXTENSIONS.join(", "),
    })
}
