//! Store trait for short URL records.

use crate::domain::entities::{InsertOutcome, ShortUrlRecord};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Durable, concurrency-safe key → URL mapping.
///
/// The only write primitive is an atomic insert-if-absent, so the store alone
/// enforces key uniqueness; callers never lock.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisRecordStore`] - Redis `SET NX`
/// - [`crate::infrastructure::persistence::InMemoryRecordStore`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a record for `key` only if no record exists for it.
    ///
    /// Presence of the key alone decides; `long_url` of an existing record is
    /// not compared.
    ///
    /// # Returns
    ///
    /// - `Ok(InsertOutcome::Created(record))` if the write happened
    /// - `Ok(InsertOutcome::AlreadyExists)` if the key was taken (nothing mutated)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on connection failure or timeout.
    async fn try_insert(&self, key: &str, long_url: &str) -> Result<InsertOutcome, StoreError>;

    /// Looks up the record for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on connection failure or timeout,
    /// [`StoreError::Corrupt`] if the stored value cannot be decoded.
    async fn get(&self, key: &str) -> Result<Option<ShortUrlRecord>, StoreError>;

    /// Checks if the backend answers.
    async fn health_check(&self) -> bool;
}
