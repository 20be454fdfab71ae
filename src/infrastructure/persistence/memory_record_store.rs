//! In-memory record store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{InsertOutcome, ShortUrlRecord, StoredRecord};
use crate::domain::errors::StoreError;
use crate::domain::repositories::RecordStore;

/// Process-local record store backed by `DashMap`.
///
/// The entry API holds the shard lock across the presence check and the
/// write, which gives the same insert-if-absent atomicity as `SET NX` within
/// one process. Records do not survive a restart and are not shared between
/// instances; use it for tests and local runs only.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: DashMap<String, StoredRecord>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn try_insert(&self, key: &str, long_url: &str) -> Result<InsertOutcome, StoreError> {
        match self.records.entry(key.to_owned()) {
            Entry::Occupied(_) => Ok(InsertOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                let record = ShortUrlRecord::new(key.to_owned(), long_url.to_owned());
                slot.insert(record.to_stored());
                Ok(InsertOutcome::Created(record))
            }
        }
    }

    async fn get(&self, key: &str) -> Result<Option<ShortUrlRecord>, StoreError> {
        Ok(self
            .records
            .get(key)
            .map(|stored| ShortUrlRecord::from_stored(key.to_owned(), stored.clone())))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
