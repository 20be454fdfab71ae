//! Record entity representing a persisted key → URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted short URL mapping.
///
/// Records are written once by the store and never updated. `created_at` is
/// `None` only for legacy values that were stored as a bare URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlRecord {
    pub key: String,
    pub long_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl ShortUrlRecord {
    /// Creates a new record stamped with the current time.
    pub fn new(key: String, long_url: String) -> Self {
        Self {
            key,
            long_url,
            created_at: Some(Utc::now()),
        }
    }

    /// Serializes the stored part of the record (everything but the key).
    pub fn to_stored(&self) -> StoredRecord {
        StoredRecord {
            long_url: self.long_url.clone(),
            created_at: self.created_at,
        }
    }

    /// Rebuilds a record from its key and stored value.
    pub fn from_stored(key: String, stored: StoredRecord) -> Self {
        Self {
            key,
            long_url: stored.long_url,
            created_at: stored.created_at,
        }
    }
}

/// Value half of a record as written to the key-value store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    pub long_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Outcome of an insert-if-absent write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was absent and the record now exists.
    Created(ShortUrlRecord),
    /// A record already existed for the key; nothing was written.
    AlreadyExists,
}

/// Result of a successful create, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub key: String,
    pub long_url: String,
    pub short_url: String,
}
