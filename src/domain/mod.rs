//! Domain layer: records, store contract, and error taxonomy.
//!
//! - [`entities`] - Record and outcome types
//! - [`repositories`] - The [`repositories::RecordStore`] contract
//! - [`errors`] - [`errors::StoreError`] and [`errors::ShortenerError`]
//!
//! The domain layer has no dependency on HTTP or on a concrete store.

pub mod entities;
pub mod errors;
pub mod repositories;
