//! UrlMapping entity - a stored short-code / URL pair

use chrono::{DateTime, Utc};

/// Maximum length of a short code accepted by the schema.
pub const MAX_SHORT_CODE_LEN: usize = 10;

/// A persisted mapping from a short code to a normalized URL.
///
/// Both `short_code` and `normalized_url` are unique in storage and immutable
/// after insert. Rows are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub short_code: String,
    pub normalized_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Create a new UrlMapping stamped with the current time.
    ///
    /// The caller is responsible for passing an already-normalized URL; the
    /// repository stores the value byte-for-byte.
    pub fn new(short_code: String, normalized_url: String) -> Self {
        Self {
            short_code,
            normalized_url,
            created_at: Utc::now(),
        }
    }
}
