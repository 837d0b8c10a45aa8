//! # Identity Namespace
//!
//! [`UserId`] is the string a client sends in `X-User-ID`. It selects which
//! history list a request reads or writes and nothing else: the server never
//! verifies it, any client can claim any value, and it must never be used to
//! decide whether an operation is allowed. Admin capability comes from the
//! session cookie, not from this value.

use serde::{Deserialize, Serialize};

/// History namespace supplied by the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Namespace used when the client sends no identity.
    pub const ANONYMOUS: &'static str = "anon";

    /// Build an identity from an optional header value. Absent and empty
    /// values both map to [`UserId::ANONYMOUS`].
    pub fn from_header(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self(v.to_string()),
            _ => Self::anonymous(),
        }
    }

    /// The shared anonymous namespace.
    pub fn anonymous() -> Self {
        Self(Self::ANONYMOUS.to_string())
    }

    /// The raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_header_is_anonymous() {
        assert_eq!(UserId::from_header(None).as_str(), "anon");
        assert_eq!(UserId::from_header(Some("")).as_str(), "anon");
        assert_eq!(UserId::default(), UserId::anonymous());
    }

    #[test]
    fn header_value_is_kept_verbatim() {
        let id = UserId::from_header(Some("user_k3j2 with spaces"));
        assert_eq!(id.as_str(), "user_k3j2 with spaces");
        assert_eq!(id.to_string(), "user_k3j2 with spaces");
    }
}
