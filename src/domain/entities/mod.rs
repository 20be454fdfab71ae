//! Core domain entities.
//!
//! - [`ShortUrlRecord`] - A persisted key → URL mapping
//! - [`StoredRecord`] - The value half of a record as it sits in the store
//! - [`InsertOutcome`] - Result of the store's insert-if-absent primitive
//! - [`CreatedLink`] - What a successful create hands back to callers

pub mod record;

pub use record::{CreatedLink, InsertOutcome, ShortUrlRecord, StoredRecord};
